//! Contact and social footer.

use leptos::prelude::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer id="info" class="site-footer">
            <div class="site-footer__grid">
                <div class="site-footer__brand">
                    <h2>"STRANGE STAY"</h2>
                    <p>"An experiment in hospitality." <br/> "Based in Seoul, open to the world."</p>
                </div>
                <div>
                    <h3 class="site-footer__heading">"Contact"</h3>
                    <ul class="site-footer__list">
                        <li>"hello@strangestay.com"</li>
                        <li>"+82 02 1234 5678"</li>
                        <li>"Seoul, Gangnam-gu"</li>
                    </ul>
                </div>
                <div>
                    <h3 class="site-footer__heading">"Social"</h3>
                    <ul class="site-footer__list">
                        <li><a href="#">"Instagram"</a></li>
                        <li><a href="#">"Twitter"</a></li>
                        <li><a href="#">"Facebook"</a></li>
                    </ul>
                </div>
            </div>
            <div class="site-footer__legal">
                <p>"© 2024 Strange Stay. All rights reserved."</p>
                <p>"Designed by AI"</p>
            </div>
        </footer>
    }
}
