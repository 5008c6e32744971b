use anyhow::Result;
use serde_json::Value;

use crate::CliTest;

fn stdout_json(output: &std::process::Output) -> Result<Value> {
    Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn test_scan_reports_component_usages() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.tsx",
        r#"import { Header, Text } from "basis";

function App() {
  return (
    <Header>
      <Text color="blue">Hello</Text>
    </Header>
  );
}

export default App;
"#,
    )?;
    test.write_file(
        ".compscanrc.json",
        r#"{ "components": ["Header", "Text"] }"#,
    )?;

    let output = test.scan_command().output()?;
    assert!(output.status.success());

    let report = stdout_json(&output)?;
    assert!(report.get("Header").is_some());
    let text_instances = report["Text"]["instances"].as_array().unwrap();
    assert_eq!(text_instances.len(), 1);
    assert_eq!(text_instances[0]["props"]["color"], "blue");
    assert_eq!(text_instances[0]["propsSpread"], false);
    assert_eq!(text_instances[0]["location"]["start"]["line"], 6);
    assert!(
        text_instances[0]["location"]["file"]
            .as_str()
            .unwrap()
            .ends_with("src/App.tsx")
    );

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Scanned 1 file, found 2 component usage(s)"));

    Ok(())
}

#[test]
fn test_scan_without_config_reports_everything() -> Result<()> {
    let test = CliTest::with_file("page.tsx", "export const x = <Banner title=\"hi\" />;")?;

    let output = test.scan_command().output()?;
    assert!(output.status.success());

    let report = stdout_json(&output)?;
    assert_eq!(report["Banner"]["instances"][0]["props"]["title"], "hi");

    Ok(())
}

#[test]
fn test_scan_sub_components_flag() -> Result<()> {
    let test = CliTest::with_file(
        "app.tsx",
        "export const x = (\n  <Header>\n    <Header.Logo />\n  </Header>\n);",
    )?;
    test.write_file(".compscanrc.json", r#"{ "components": ["Header"] }"#)?;

    // Without the flag only the top-level usage is reported.
    let report = stdout_json(&test.scan_command().output()?)?;
    assert!(report["Header"].get("components").is_none());

    let output = test
        .scan_command()
        .arg("--include-sub-components")
        .output()?;
    let report = stdout_json(&output)?;
    assert!(report["Header"]["components"]["Logo"]["instances"].is_array());

    Ok(())
}

#[test]
fn test_scan_imported_from_flag() -> Result<()> {
    let test = CliTest::with_file(
        "a.tsx",
        "import { Header } from \"basis\";\nexport const x = <Header />;",
    )?;
    test.write_file(
        "b.tsx",
        "import { Header } from \"other\";\nexport const y = <Header />;",
    )?;

    let output = test
        .scan_command()
        .args(["--component", "Header", "--imported-from", "basis"])
        .output()?;
    assert!(output.status.success());

    let report = stdout_json(&output)?;
    let instances = report["Header"]["instances"].as_array().unwrap();
    assert_eq!(instances.len(), 1);
    assert!(
        instances[0]["location"]["file"]
            .as_str()
            .unwrap()
            .ends_with("a.tsx")
    );

    Ok(())
}

#[test]
fn test_scan_parse_failure_sets_exit_code() -> Result<()> {
    let test = CliTest::with_file("broken.tsx", "<foo")?;
    test.write_file("ok.tsx", "export const x = <Box />;")?;

    let output = test.scan_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    // The good file still made it into the report.
    let report = stdout_json(&output)?;
    assert!(report.get("Box").is_some());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Failed to parse"));
    assert!(stderr.contains("1 file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_scan_fatal_error_sets_exit_code() -> Result<()> {
    let test = CliTest::with_file("svg.tsx", "export const x = <svg:path />;")?;

    let output = test.scan_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("unsupported tag name"));

    Ok(())
}

#[test]
fn test_scan_output_file() -> Result<()> {
    let test = CliTest::with_file("app.tsx", "export const x = <Box />;")?;

    let output = test
        .scan_command()
        .args(["--output", "report.json"])
        .output()?;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let report: Value = serde_json::from_str(&test.read_file("report.json")?)?;
    assert!(report.get("Box").is_some());

    Ok(())
}

#[test]
fn test_scan_respects_ignores_and_test_files() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", "export const x = <Box />;")?;
    test.write_file("src/app.test.tsx", "export const y = <Box />;")?;
    test.write_file("dist/out.tsx", "export const z = <Box />;")?;
    test.write_file(
        ".compscanrc.json",
        r#"{ "components": ["Box"], "ignores": ["**/dist/**"] }"#,
    )?;

    let output = test.scan_command().output()?;
    assert!(output.status.success());

    let report = stdout_json(&output)?;
    let instances = report["Box"]["instances"].as_array().unwrap();
    assert_eq!(instances.len(), 1);
    assert!(
        instances[0]["location"]["file"]
            .as_str()
            .unwrap()
            .ends_with("src/app.tsx")
    );

    Ok(())
}

#[test]
fn test_scan_instances_follow_sorted_file_order() -> Result<()> {
    let test = CliTest::with_file("b.tsx", "export const b = <Box />;")?;
    test.write_file("a.tsx", "export const a = <Box />;")?;

    let output = test.scan_command().output()?;
    let report = stdout_json(&output)?;

    let files: Vec<&str> = report["Box"]["instances"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["location"]["file"].as_str().unwrap())
        .collect();
    assert!(files[0].ends_with("a.tsx"));
    assert!(files[1].ends_with("b.tsx"));

    Ok(())
}
