/// The `<gui>` section of the daemon's `config.xml`, reduced to the three
/// values this tool cares about. The section is extracted with lightweight
/// tag scanning; the daemon writes this file itself, so the markup is
/// predictable and a full XML dependency is not warranted.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GuiSection {
    pub api_key: String,
    pub address: String,
    pub tls: bool,
}

impl GuiSection {
    /// Base target URL derived from the listen address, or `None` when the
    /// file carries no address.
    pub fn target_url(&self) -> Option<String> {
        if self.address.is_empty() {
            return None;
        }
        let scheme = if self.tls { "https" } else { "http" };
        Some(format!("{}://{}", scheme, self.address))
    }
}

/// Extract the `<gui>` section. `None` when the document has no such
/// element at all.
pub fn parse_gui_section(xml: &str) -> Option<GuiSection> {
    let open_start = xml.find("<gui")?;
    let after_open = &xml[open_start..];
    let open_end = after_open.find('>')?;
    let attrs = &after_open[..open_end];
    let body_start = open_start + open_end + 1;
    let body = match xml[body_start..].find("</gui>") {
        Some(close) => &xml[body_start..body_start + close],
        None => &xml[body_start..],
    };

    Some(GuiSection {
        api_key: tag_text(body, "apikey").unwrap_or_default(),
        address: tag_text(body, "address").unwrap_or_default(),
        tls: attrs.contains(r#"tls="true""#),
    })
}

fn tag_text(xml: &str, tag: &str) -> Option<String> {
    let start_tag = format!("<{tag}>");
    let end_tag = format!("</{tag}>");
    let start = xml.find(&start_tag)? + start_tag.len();
    let rest = &xml[start..];
    let end = rest.find(&end_tag)?;
    Some(rest[..end].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<configuration version="37">
    <gui enabled="true" tls="false" debugging="false">
        <address>127.0.0.1:8384</address>
        <apikey>abcdef123456</apikey>
        <theme>default</theme>
    </gui>
</configuration>"#;

    #[test]
    fn extracts_api_key_and_address() {
        let gui = parse_gui_section(SAMPLE).unwrap();
        assert_eq!(gui.api_key, "abcdef123456");
        assert_eq!(gui.address, "127.0.0.1:8384");
        assert!(!gui.tls);
        assert_eq!(gui.target_url().unwrap(), "http://127.0.0.1:8384");
    }

    #[test]
    fn tls_attribute_selects_the_secure_scheme() {
        let xml = SAMPLE.replace(r#"tls="false""#, r#"tls="true""#);
        let gui = parse_gui_section(&xml).unwrap();
        assert!(gui.tls);
        assert_eq!(gui.target_url().unwrap(), "https://127.0.0.1:8384");
    }

    #[test]
    fn empty_address_yields_no_target() {
        let xml = "<gui tls=\"false\"><apikey>k</apikey></gui>";
        let gui = parse_gui_section(xml).unwrap();
        assert_eq!(gui.api_key, "k");
        assert_eq!(gui.target_url(), None);
    }

    #[test]
    fn document_without_gui_section_is_none() {
        assert_eq!(parse_gui_section("<configuration></configuration>"), None);
    }
}
