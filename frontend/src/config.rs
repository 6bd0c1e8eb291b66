use log::Level;

pub const RELAY_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const RELAY_SERVICE_ID: &str = "origin_golf_contact";
pub const RELAY_TEMPLATE_ID: &str = "og_contact_template";
pub const RELAY_PUBLIC_KEY: &str = "rh-c3U2fhvo1jb1rz";

/// Name the relay template greets in the delivered email.
pub const RELAY_RECIPIENT: &str = "Chase";

pub const RECAPTCHA_SITE_KEY: &str = "6LcudtcpAAAAANA-1o2IeZ9q2MyhaLJZciuEb3ap";

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}
