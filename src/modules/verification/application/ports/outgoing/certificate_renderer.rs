use crate::verification::application::domain::certificate::CertificateView;

pub trait CertificateRenderer: Send + Sync {
    /// The certificate card alone.
    fn render_fragment(&self, view: &CertificateView) -> String;

    /// A complete document wrapping the card.
    fn render_page(&self, title: &str, view: &CertificateView) -> String;

    fn render_not_found_page(&self, unique_id: &str) -> String;
}
