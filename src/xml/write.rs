//! [`Document`] → indented XML text

use super::{Document, NodeId, NodeKind};
use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// Spaces per nesting level
const INDENT: usize = 2;

impl Document {
    /// Serialize with an XML declaration and two-space indentation.
    ///
    /// Output depends only on the tree, so identical input gives identical
    /// bytes. Text stays inline with its parent's tags.
    pub fn write_pretty<W: Write>(&self, out: W) -> quick_xml::Result<W> {
        let mut writer = Writer::new_with_indent(out, b' ', INDENT);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        if let Some(root) = self.root {
            self.write_node(&mut writer, root)?;
        }
        let mut out = writer.into_inner();
        out.write_all(b"\n")?;
        Ok(out)
    }

    /// [`Document::write_pretty`] into a `String`
    pub fn to_pretty_string(&self) -> quick_xml::Result<String> {
        let bytes = self.write_pretty(Vec::new())?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn write_node<W: Write>(&self, writer: &mut Writer<W>, id: NodeId) -> quick_xml::Result<()> {
        match self.kind(id) {
            NodeKind::Element(element) => {
                let mut start = BytesStart::new(element.name.as_str());
                for attr in element.attributes() {
                    start.push_attribute(attr);
                }
                let children = self.children(id);
                if children.is_empty() {
                    writer.write_event(Event::Empty(start))?;
                } else {
                    writer.write_event(Event::Start(start))?;
                    for &child in children {
                        self.write_node(writer, child)?;
                    }
                    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
                }
            }
            NodeKind::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
            NodeKind::CData(text) => {
                writer.write_event(Event::CData(BytesCData::new(text.as_str())))?;
            }
            NodeKind::Comment(text) => {
                writer.write_event(Event::Comment(BytesText::from_escaped(text.as_str())))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_output_layout() {
        let doc = Document::parse_str(
            r#"<testsuites><testsuite name="A &amp; B"><testcase name="t"><failure>bad</failure></testcase><testcase name="u"/></testsuite></testsuites>"#,
        )
        .unwrap();

        let expected = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<testsuites>
  <testsuite name=\"A &amp; B\">
    <testcase name=\"t\">
      <failure>bad</failure>
    </testcase>
    <testcase name=\"u\"/>
  </testsuite>
</testsuites>
";
        assert_eq!(doc.to_pretty_string().unwrap(), expected);
    }

    #[test]
    fn test_blank_leaf_text_is_written_verbatim() {
        let doc = Document::parse_str(
            "<testcase name=\"t\">\n  <system-out>   </system-out>\n</testcase>",
        )
        .unwrap();
        let xml = doc.to_pretty_string().unwrap();
        assert!(xml.contains("  <system-out>   </system-out>\n"));
    }

    #[test]
    fn test_reparse_of_output_is_stable() {
        let input = "<a x=\"1\"><b>t &lt; u</b><![CDATA[raw]]><!--note--></a>";
        let first = Document::parse_str(input).unwrap().to_pretty_string().unwrap();
        let second = Document::parse_str(&first).unwrap().to_pretty_string().unwrap();
        assert_eq!(first, second);
    }
}
