//! Static storefront footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-section">
                        <h3>"MediCare"</h3>
                        <p>
                            "Your trusted online pharmacy for genuine medicines and healthcare products."
                        </p>
                    </div>
                    <div class="footer-section">
                        <h4>"Customer Service"</h4>
                        <ul>
                            <li>"Help Center"</li>
                            <li>"Track Your Order"</li>
                            <li>"Returns & Refunds"</li>
                            <li>"Contact Us"</li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>"© 2025 MediCare. All rights reserved."</p>
                    <div class="certifications">
                        <span>"✅ Licensed Pharmacy"</span>
                        <span>"🔒 SSL Secured"</span>
                    </div>
                </div>
            </div>
        </footer>
    }
}
