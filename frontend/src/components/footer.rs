use chrono::{Datelike, Local};
use yew::prelude::*;

pub const PHONE: &str = "(760) 599-4499";
pub const EMAIL: &str = "kevin@origingolf.com";

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        width: 100%;
                        background: #000;
                        padding: 8rem 0 2rem;
                        text-align: center;
                        color: #fff;
                        font-size: 1.125rem;
                    }
                    .site-footer h3 {
                        margin-bottom: 1rem;
                        font-size: 3rem;
                        font-weight: 500;
                        letter-spacing: -0.025em;
                    }
                    .site-footer p {
                        margin-bottom: 0.5rem;
                    }
                    .site-footer a {
                        color: inherit;
                        text-decoration: underline;
                    }
                    .footer-address {
                        line-height: 1.25rem;
                    }
                    @media (max-width: 399px) {
                        .footer-separator {
                            display: none;
                        }
                    }
                    @media (min-width: 400px) {
                        .footer-break {
                            display: none;
                        }
                    }
                "#}
            </style>
            <h3>{"Origin Golf"}</h3>
            <p>
                {PHONE}
                <span class="footer-separator">{" | "}</span>
                <br class="footer-break" />
                <a href={format!("mailto:{}", EMAIL)}>{EMAIL}</a>
            </p>
            <p class="footer-address">
                {"925 Poinsettia Ave, Suite 2"}<br />
                {"Vista, CA 92081, United States"}
            </p>
            <p>{format!("© Copyright {}", year)}</p>
        </footer>
    }
}
