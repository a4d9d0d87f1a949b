use crate::domain::model::{TrackingOutcome, TrackingRecord};
use crate::domain::page::{Banner, BannerKind};
use std::borrow::Cow;

pub const TRACKING_NOT_FOUND_MESSAGE: &str = "Verifique o código e tente novamente.";

/// 轉義 HTML 特殊字元；不需轉義時不配置新字串
pub fn html_escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// 查詢結果區塊的 HTML
pub fn render_tracking(outcome: &TrackingOutcome) -> String {
    match outcome {
        TrackingOutcome::Found(record) => render_record(record),
        TrackingOutcome::NotFound => render_notice(
            "rastreamento-erro",
            "",
            "Entrega não encontrada",
            TRACKING_NOT_FOUND_MESSAGE,
        ),
        TrackingOutcome::Unavailable { message } => render_notice(
            "rastreamento-indisponivel",
            " role=\"alert\"",
            "Serviço indisponível",
            message,
        ),
    }
}

fn render_notice(class: &str, attributes: &str, title: &str, text: &str) -> String {
    format!(
        "<div class=\"{}\"{}>\n  <h3>{}</h3>\n  <p>{}</p>\n</div>",
        class,
        attributes,
        title,
        html_escape(text)
    )
}

fn render_record(record: &TrackingRecord) -> String {
    let rows = [
        ("Código", &record.codigo),
        ("Status", &record.status),
        ("Destinatário", &record.destinatario),
        ("Cidade", &record.cidade_destino),
        ("Data", &record.data_criacao),
    ];

    let mut html = String::from(
        "<div class=\"rastreamento-sucesso\">\n  <h3>Entrega Encontrada!</h3>\n",
    );
    for (label, value) in rows {
        html.push_str(&format!(
            "  <p><strong>{}:</strong> {}</p>\n",
            label,
            html_escape(value)
        ));
    }
    html.push_str("</div>");
    html
}

pub fn render_banner(banner: &Banner) -> String {
    let role = match banner.kind {
        BannerKind::Error => " role=\"alert\"",
        BannerKind::Success => "",
    };

    format!(
        "<div class=\"{}\"{} aria-live=\"{}\">{}</div>",
        banner.kind.css_class(),
        role,
        banner.kind.aria_live(),
        html_escape(&banner.message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TrackingRecord {
        TrackingRecord {
            codigo: "EI12345678".to_string(),
            status: "em trânsito".to_string(),
            destinatario: "Ana <b>Lima</b>".to_string(),
            cidade_destino: "Itaporanga".to_string(),
            data_criacao: "01/02/2025 09:15".to_string(),
        }
    }

    #[test]
    fn test_html_escape() {
        assert!(matches!(html_escape("texto simples"), Cow::Borrowed(_)));
        assert_eq!(
            html_escape(r#"<a href="x">O'Neil & Cia</a>"#),
            "&lt;a href=&quot;x&quot;&gt;O&#x27;Neil &amp; Cia&lt;/a&gt;"
        );
    }

    #[test]
    fn test_render_found_shows_all_fields_escaped() {
        let html = render_tracking(&TrackingOutcome::Found(record()));

        assert!(html.contains("rastreamento-sucesso"));
        assert!(html.contains("EI12345678"));
        assert!(html.contains("em trânsito"));
        assert!(html.contains("Itaporanga"));
        assert!(html.contains("01/02/2025 09:15"));
        assert!(html.contains("Ana &lt;b&gt;Lima&lt;/b&gt;"));
        assert!(html.contains("<h3>Entrega Encontrada!</h3>"));
        assert!(html.contains("<strong>Cidade:</strong> Itaporanga"));
        assert!(html.contains("<strong>Data:</strong> 01/02/2025 09:15"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_not_found_and_unavailable_are_distinct() {
        let not_found = render_tracking(&TrackingOutcome::NotFound);
        let unavailable = render_tracking(&TrackingOutcome::Unavailable {
            message: "Erro ao consultar rastreamento. Tente novamente.".to_string(),
        });

        assert!(not_found.contains("rastreamento-erro"));
        assert!(not_found.contains("<h3>Entrega não encontrada</h3>"));
        assert!(not_found.contains("Verifique o código e tente novamente."));
        assert!(!not_found.contains("rastreamento-indisponivel"));
        assert!(unavailable.contains("rastreamento-indisponivel"));
        assert!(unavailable.contains("Erro ao consultar rastreamento"));
        assert_ne!(not_found, unavailable);
    }

    #[test]
    fn test_render_banner_accessibility_attributes() {
        let error = render_banner(&Banner::error("Falhou <script>"));
        assert!(error.starts_with(
            "<div class=\"alert alert-error\" role=\"alert\" aria-live=\"assertive\">"
        ));
        assert!(error.contains("Falhou &lt;script&gt;"));

        let success = render_banner(&Banner::success("Tudo certo"));
        assert_eq!(
            success,
            "<div class=\"alert alert-success\" aria-live=\"polite\">Tudo certo</div>"
        );
    }
}
