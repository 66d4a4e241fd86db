//! TestGrid-compatible JUnit XML output.
//!
//! Output structure:
//!
//! ```text
//! <testsuite tests="N" failures="F">
//!   <testcase class_name="" name="OverallRoute" time="0">
//!     <properties>
//!       <property name="api_coverage" value="50"/>
//!     </properties>
//!   </testcase>
//!   <testcase class_name="" name="OverallRoute/route.Spec.Traffic" time="0">
//!     <properties>...</properties>
//!     <failure>true</failure>
//!   </testcase>
//! </testsuite>
//! ```
use std::path::{Path, PathBuf};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::info;

use crate::error::{ApiCovError, Result};
use crate::report::{TestCase, TestSuite};

/// File name the dashboard picks up from the artifacts directory.
pub const REPORT_FILE: &str = "junit_knative.xml";

/// Serialize the suite to an XML document.
pub fn to_xml(suite: &TestSuite) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;

    let tests = suite.cases.len().to_string();
    let failures = suite.failures().to_string();
    let mut start = BytesStart::new("testsuite");
    start.push_attribute(("tests", tests.as_str()));
    start.push_attribute(("failures", failures.as_str()));
    emit(&mut writer, Event::Start(start))?;

    for case in &suite.cases {
        write_case(&mut writer, case)?;
    }

    emit(&mut writer, Event::End(BytesEnd::new("testsuite")))?;

    String::from_utf8(writer.into_inner()).map_err(|e| ApiCovError::Xml(e.to_string()))
}

fn write_case(writer: &mut Writer<Vec<u8>>, case: &TestCase) -> Result<()> {
    let mut start = BytesStart::new("testcase");
    start.push_attribute(("class_name", ""));
    start.push_attribute(("name", case.name.as_str()));
    start.push_attribute(("time", "0"));
    emit(writer, Event::Start(start))?;

    emit(writer, Event::Start(BytesStart::new("properties")))?;
    let value = case.property.value.to_string();
    let mut property = BytesStart::new("property");
    property.push_attribute(("name", case.property.name.as_str()));
    property.push_attribute(("value", value.as_str()));
    emit(writer, Event::Empty(property))?;
    emit(writer, Event::End(BytesEnd::new("properties")))?;

    if case.fail {
        emit(writer, Event::Start(BytesStart::new("failure")))?;
        emit(writer, Event::Text(BytesText::new("true")))?;
        emit(writer, Event::End(BytesEnd::new("failure")))?;
    }

    emit(writer, Event::End(BytesEnd::new("testcase")))
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| ApiCovError::Xml(e.to_string()))
}

/// Write the suite to `<artifacts_dir>/junit_knative.xml`, creating the
/// directory if needed. Returns the path written.
pub fn write_xml(suite: &TestSuite, artifacts_dir: &Path) -> Result<PathBuf> {
    let xml = to_xml(suite)?;
    std::fs::create_dir_all(artifacts_dir)?;
    let path = artifacts_dir.join(REPORT_FILE);
    info!(path = %path.display(), cases = suite.cases.len(), "storing output");
    std::fs::write(&path, xml + "\n")?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::TestProperty;

    fn case(name: &str, value: f64, fail: bool) -> TestCase {
        TestCase {
            name: name.to_string(),
            property: TestProperty {
                name: "api_coverage".to_string(),
                value,
            },
            fail,
        }
    }

    fn sample_suite() -> TestSuite {
        TestSuite {
            cases: vec![
                case("OverallRoute", 50.0, false),
                case("OverallRoute/route.Name", 3.0, false),
                case("OverallRoute/route.Count", 0.0, true),
            ],
        }
    }

    #[test]
    fn test_to_xml_structure() {
        let xml = to_xml(&sample_suite()).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<testsuite tests=\"3\" failures=\"1\">"));
        assert!(xml.contains("<testcase class_name=\"\" name=\"OverallRoute\" time=\"0\">"));
        assert!(xml.contains("<property name=\"api_coverage\" value=\"50\"/>"));
        assert!(xml.contains("<property name=\"api_coverage\" value=\"3\"/>"));
        assert_eq!(xml.matches("<failure>true</failure>").count(), 1);
        assert!(xml.trim_end().ends_with("</testsuite>"));
    }

    #[test]
    fn test_failure_belongs_to_not_covered_case() {
        let xml = to_xml(&sample_suite()).unwrap();
        let count_case = xml.find("name=\"OverallRoute/route.Count\"").unwrap();
        let failure = xml.find("<failure>").unwrap();
        assert!(failure > count_case);
    }

    #[test]
    fn test_to_xml_escapes_names() {
        let suite = TestSuite {
            cases: vec![case("Overall<Route>&", 1.0, false)],
        };
        let xml = to_xml(&suite).unwrap();
        assert!(xml.contains("name=\"Overall&lt;Route&gt;&amp;\""));
    }

    #[test]
    fn test_to_xml_empty_suite() {
        let xml = to_xml(&TestSuite::default()).unwrap();
        assert!(xml.contains("<testsuite tests=\"0\" failures=\"0\">"));
    }

    #[test]
    fn test_write_xml_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = dir.path().join("nested").join("artifacts");

        let path = write_xml(&sample_suite(), &artifacts).unwrap();

        assert_eq!(path, artifacts.join(REPORT_FILE));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("OverallRoute/route.Name"));
        assert!(content.ends_with('\n'));
    }
}
