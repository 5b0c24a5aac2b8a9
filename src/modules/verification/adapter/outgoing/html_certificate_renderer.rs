use std::fmt::Write;

use crate::verification::application::domain::certificate::CertificateView;
use crate::verification::application::ports::outgoing::CertificateRenderer;

const BRAND: &str = "VeriUserRU";

const STYLES: &str = r#"
body { margin: 0; padding: 32px 16px; background: #f3f4f6; font-family: Roboto, Arial, sans-serif; }
.certificate { position: relative; max-width: 672px; margin: 0 auto; padding: 32px; background: #fff; border: 2px solid #e5e7eb; box-shadow: 0 10px 15px rgba(0,0,0,.1); overflow: hidden; }
.watermark { position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; opacity: .1; pointer-events: none; color: #2563eb; }
.watermark span { position: absolute; font-size: 36px; font-weight: 700; }
.content { position: relative; z-index: 1; }
.header { text-align: center; margin-bottom: 32px; }
.header h1 { margin: 0 0 8px; font-family: Montserrat, sans-serif; font-size: 30px; }
.header p, .muted { color: #6b7280; font-size: 14px; }
.row { display: flex; justify-content: space-between; padding: 12px 0; border-bottom: 1px solid #f3f4f6; }
.row .label { color: #4b5563; font-weight: 500; }
.row .value { color: #111827; font-weight: 600; }
.status { padding: 4px 12px; background: #dcfce7; color: #15803d; border-radius: 9999px; font-size: 14px; font-weight: 600; }
.network { display: flex; justify-content: space-between; background: #f9fafb; padding: 8px 12px; margin-top: 8px; border-radius: 8px; }
.network a { color: #2563eb; font-size: 14px; }
.footer { margin-top: 24px; padding-top: 24px; border-top: 2px solid #e5e7eb; display: flex; justify-content: space-between; align-items: center; }
.token { font-size: 18px; font-weight: 700; letter-spacing: .05em; }
.not-found { max-width: 480px; margin: 64px auto; text-align: center; }
"#;

const WATERMARK_SVG: &str = r#"<svg width="300" height="300" viewBox="0 0 300 300"><circle cx="150" cy="150" r="140" fill="none" stroke="currentColor" stroke-width="8"/><circle cx="150" cy="150" r="120" fill="none" stroke="currentColor" stroke-width="4"/><circle cx="150" cy="150" r="100" fill="none" stroke="currentColor" stroke-width="2"/><path d="M 120 150 L 140 170 L 180 120" fill="none" stroke="currentColor" stroke-width="12" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

/// Self-contained HTML with inline styles. Every interpolated value is
/// escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlCertificateRenderer;

impl HtmlCertificateRenderer {
    fn document(title: &str, body: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"ru\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
            escape_html(title),
            STYLES,
            body
        )
    }
}

impl CertificateRenderer for HtmlCertificateRenderer {
    fn render_fragment(&self, view: &CertificateView) -> String {
        let mut html = String::new();

        html.push_str(r#"<div class="certificate" id="certificate-content">"#);

        if view.show_watermark {
            let _ = write!(
                html,
                r#"<div class="watermark" aria-hidden="true">{WATERMARK_SVG}<span>VU</span></div>"#
            );
        }

        html.push_str(r#"<div class="content">"#);
        let _ = write!(
            html,
            r#"<div class="header"><h1>{BRAND}</h1><p>Сертификат Верификации</p></div>"#
        );
        let _ = write!(
            html,
            r#"<div class="header"><h2>Верифицированный аккаунт</h2><p>Подтверждено {BRAND}</p></div>"#
        );

        push_row(&mut html, "Юзернейм", &escape_html(&view.username));
        push_row(&mut html, "Телефон", &escape_html(&view.masked_phone));
        push_row(&mut html, "ID пользователя", &escape_html(&view.user_id));

        if !view.social_networks.is_empty() {
            html.push_str(r#"<div class="networks"><span class="label">Социальные сети:</span>"#);
            for network in &view.social_networks {
                let name = escape_html(&network.name);
                let url = escape_html(&network.url);
                if network.is_link {
                    let _ = write!(
                        html,
                        r#"<div class="network"><span>{name}</span><a href="{url}" target="_blank" rel="noopener noreferrer">{url}</a></div>"#
                    );
                } else {
                    let _ = write!(
                        html,
                        r#"<div class="network"><span>{name}</span><span>{url}</span></div>"#
                    );
                }
            }
            html.push_str("</div>");
        }

        push_row(
            &mut html,
            "Статус",
            &format!(r#"<span class="status">{}</span>"#, escape_html(&view.status)),
        );
        push_row(&mut html, "Каталог", &escape_html(&view.category));
        push_row(&mut html, "Дата создания", &escape_html(&view.issued_at));

        let _ = write!(
            html,
            r#"<div class="footer"><div><p class="muted">Уникальный ID сертификата:</p><p class="token">{}</p></div><div class="muted">Подтверждено</div></div>"#,
            escape_html(&view.unique_id)
        );

        html.push_str("</div></div>");
        html
    }

    fn render_page(&self, title: &str, view: &CertificateView) -> String {
        Self::document(title, &self.render_fragment(view))
    }

    fn render_not_found_page(&self, unique_id: &str) -> String {
        let body = format!(
            r#"<div class="not-found"><h1>Сертификат не найден</h1><p class="muted">Сертификат с ID <strong>{}</strong> не существует или был удалён.</p></div>"#,
            escape_html(unique_id)
        );
        Self::document(&format!("{BRAND}: сертификат не найден"), &body)
    }
}

fn push_row(html: &mut String, label: &str, value_html: &str) {
    let _ = write!(
        html,
        r#"<div class="row"><span class="label">{label}:</span><span class="value">{value_html}</span></div>"#
    );
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
