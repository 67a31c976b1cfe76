use schemagen_cli::commands::{component, module};
use tempfile::TempDir;

#[test]
fn test_component_command_writes_schema_json() {
    let temp_dir = TempDir::new().unwrap();
    let spec_file = temp_dir.path().join("ModuleNativeComponent.ts");
    std::fs::write(
        &spec_file,
        r#"
interface ModuleProps extends ViewProps {
  enabled?: boolean;
}
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap();

    let output = temp_dir.path().join("schema.json");
    component::execute_component(&spec_file, Some(&output)).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["componentName"], "Module");
    assert_eq!(value["props"][0]["name"], "enabled");
}

#[test]
fn test_module_command_writes_schema_json() {
    let temp_dir = TempDir::new().unwrap();
    let spec_file = temp_dir.path().join("NativeSampleAndroid.ts");
    std::fs::write(
        &spec_file,
        r#"
interface Spec extends TurboModule {
  ping(): string;
}
export default TurboModuleRegistry.getEnforcing<Spec>('Sample');
"#,
    )
    .unwrap();

    let output = temp_dir.path().join("schema.json");
    module::execute_module(&spec_file, Some(&output)).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["moduleNames"][0], "Sample");
    assert_eq!(value["excludedPlatforms"][0], "iOS");
}

#[test]
fn test_component_command_fails_on_invalid_spec() {
    let temp_dir = TempDir::new().unwrap();
    let spec_file = temp_dir.path().join("Broken.ts");
    std::fs::write(&spec_file, "const x = 1;").unwrap();

    let result = component::execute_component(&spec_file, None);
    assert!(result.is_err());
}
