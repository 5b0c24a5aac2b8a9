use async_trait::async_trait;
use std::sync::Arc;

use crate::verification::application::domain::certificate::CertificateView;
use crate::verification::application::ports::outgoing::{
    CertificateExportError, CertificateExporter, CertificateRenderer, ExportArtifact,
};

const PRINT_STYLES: &str = "<style>@page { size: A4; margin: 12mm; } \
@media print { body { background: #fff; padding: 0; } .certificate { box-shadow: none; } }</style>";

/// Exports a certificate as a standalone, print-ready HTML document.
///
/// The document opens the print dialog on load so the browser can save it
/// as PDF.
pub struct PrintDocumentExporter {
    renderer: Arc<dyn CertificateRenderer>,
}

impl PrintDocumentExporter {
    pub fn new(renderer: Arc<dyn CertificateRenderer>) -> Self {
        Self { renderer }
    }

    pub fn file_name_for(unique_id: &str) -> String {
        let safe: String = unique_id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        format!("VeriUserRU_{safe}.html")
    }
}

#[async_trait]
impl CertificateExporter for PrintDocumentExporter {
    async fn export(&self, view: &CertificateView) -> Result<ExportArtifact, CertificateExportError> {
        let page = self
            .renderer
            .render_page(&format!("VeriUserRU_{}", view.unique_id), view);

        let Some(head_end) = page.find("</head>") else {
            return Err(CertificateExportError::RenderingFailed(
                "rendered page has no head section".to_string(),
            ));
        };

        let mut document = String::with_capacity(page.len() + 256);
        document.push_str(&page[..head_end]);
        document.push_str(PRINT_STYLES);
        document.push_str("<script>window.addEventListener('load', function () { window.print(); });</script>");
        document.push_str(&page[head_end..]);

        Ok(ExportArtifact {
            file_name: Self::file_name_for(&view.unique_id),
            content_type: "text/html; charset=utf-8".to_string(),
            bytes: document.into_bytes(),
        })
    }
}
