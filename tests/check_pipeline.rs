//! End-to-end check runs over fixture projects.

use route_reach::check::{self, verdict, Verdict};
use route_reach::config::{load_config, ReportFormat};
use route_reach::extract::DeadReason;
use route_reach::report::{write_report, FailureReason};

mod common;

use common::{empty_screen, FixtureProject};

fn whatssound_like_project() -> FixtureProject {
    let project = FixtureProject::new();
    project.file("app/_layout.tsx", "export default function Layout() { return <Stack />; }");
    project.file("app/index.tsx", "<Redirect href=\"/(auth)/login\" />");
    project.file(
        "app/(auth)/login.tsx",
        r#"
export default function Login() {
  return (
    <View>
      <Pressable onPress={() => router.replace('/(tabs)')}><Text>Entrar</Text></Pressable>
      <Link href="/(auth)/register">Crear cuenta</Link>
      <Link href="/(auth)/forgot">Olvidé mi contraseña</Link>
    </View>
  );
}
"#,
    );
    project.file("app/(auth)/register.tsx", &empty_screen("Registro"));
    project.file("app/(tabs)/_layout.tsx", "export default function Tabs() { return <Tabs />; }");
    project.file("app/(tabs)/index.tsx", &empty_screen("Inicio"));
    project.file(
        "app/(tabs)/live.tsx",
        r#"
export default function Live() {
  return (
    <ScrollView>
      <Pressable onPress={() => router.push(`/session/${session.id}`)} />
      <Pressable onPress={() => router.push({ pathname: '/session/[id]', params: { id } })} />
      <TouchableOpacity style={styles.tip}><Text>Propina</Text></TouchableOpacity>
      <Pressable onPress={() => router.push('/admin/user')} />
    </ScrollView>
  );
}
"#,
    );
    project.file("app/session/[id].tsx", &empty_screen("Sesión"));
    project.file("app/+not-found.tsx", &empty_screen("404"));
    project.file(
        "components/TipButton.tsx",
        "export const TipButton = () => <Button title=\"Tip\" onPress={() => {}} />;",
    );
    project
}

const MANIFEST: &str = r#"
[routes]
app_dir = "app"
declared = ["admin/users"]

[[requests]]
origin = "settings"
action = "Tap Subscription"
destination = "/settings/subscription"

[scan]
dirs = ["app", "components"]

[policy]
critical_origins = ["(auth)"]
"#;

#[test]
fn test_full_check() {
    let project = whatssound_like_project();
    let config = load_config(&project.manifest(MANIFEST)).unwrap();

    let table = check::route_table(&config).unwrap();
    let routes: Vec<_> = table.entries().iter().map(|e| e.declared()).collect();
    assert_eq!(
        routes,
        vec![
            "admin/users",
            "(auth)/login",
            "(auth)/register",
            "(tabs)",
            "(tabs)/live",
            "/",
            "session/[id]",
        ]
    );

    let report = check::check(&config).unwrap();
    assert_eq!(report.total_routes, 7);
    // 1 declared + 1 redirect + 3 login + 3 live (the interpolated one included)
    assert_eq!(report.total_requests, 8);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.checked, 7);
    assert_eq!(report.resolved, 4);
    assert_eq!(report.unresolved, 3);

    let failed: Vec<_> = report
        .failures
        .iter()
        .map(|f| (f.request.destination.as_str(), f.request.critical, f.reason))
        .collect();
    assert!(failed.contains(&("/settings/subscription", false, FailureReason::NoMatchingRoute)));
    assert!(failed.contains(&("/(auth)/forgot", true, FailureReason::NoMatchingRoute)));
    assert!(failed.contains(&("/admin/user", false, FailureReason::NoMatchingRoute)));

    let dead: Vec<_> = report
        .dead_interactions
        .iter()
        .map(|d| (d.origin.as_str(), d.element.as_str(), d.reason))
        .collect();
    assert_eq!(
        dead,
        vec![
            ("(tabs)/live", "TouchableOpacity", DeadReason::MissingHandler),
            ("components/TipButton", "Button", DeadReason::EmptyHandler),
        ]
    );

    // A critical origin failed
    assert_eq!(verdict(&report, false), Verdict::Fail);
}

#[test]
fn test_declared_only_manifest() {
    let project = FixtureProject::new();
    let manifest = project.manifest(
        r#"
[routes]
declared = ["(auth)/login", "session/[id]", "(tabs)/live", "(tabs)"]

[[requests]]
origin = "(auth)/login"
action = "Sign in"
destination = "/(tabs)"
critical = true

[[requests]]
origin = "(tabs)/live"
action = "Open session"
destination = "session/${sid}"

[[requests]]
origin = "home"
action = "Go live"
destination = "live"

[[requests]]
origin = "home"
action = "Admin"
destination = "admin/user"
"#,
    );
    let config = load_config(&manifest).unwrap();
    let report = check::check(&config).unwrap();

    assert_eq!(report.skipped, 1);
    assert_eq!(report.resolved, 2);
    assert_eq!(report.unresolved, 1);
    assert_eq!(verdict(&report, false), Verdict::Warn);
    assert_eq!(verdict(&report, true), Verdict::Fail);
}

#[test]
fn test_report_file_is_written() {
    let project = whatssound_like_project();
    let mut config = load_config(&project.manifest(MANIFEST)).unwrap();
    config.report.path = Some(project.root().join("reports/nav.json"));
    config.report.format = ReportFormat::Json;

    let report = check::check(&config).unwrap();
    write_report(&report, config.report.format, config.report.path.as_deref()).unwrap();

    let written = std::fs::read_to_string(project.root().join("reports/nav.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["unresolved"], 3);
    assert_eq!(value["dead_interactions"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_non_utf8_source_does_not_abort() {
    let project = FixtureProject::new();
    project.file("app/index.tsx", "<Link href=\"/live\">Live</Link>");
    project.file("app/live.tsx", &empty_screen("Live"));
    let legacy = project.root().join("app/legacy.js");
    std::fs::write(&legacy, b"router.push('/caf\xe9');\n\xff\xfe router.push('/nowhere');\n").unwrap();

    let manifest = project.manifest("[routes]\napp_dir = \"app\"\n\n[scan]\ndirs = [\"app\"]\n");
    let config = load_config(&manifest).unwrap();
    let report = check::check(&config).unwrap();

    // The legacy file is still scanned, with invalid bytes replaced
    assert_eq!(report.total_routes, 3);
    assert_eq!(report.resolved, 1);
    let failed: Vec<_> = report
        .failures
        .iter()
        .map(|f| (f.request.origin.as_str(), f.request.destination.as_str()))
        .collect();
    assert!(failed.contains(&("legacy", "/nowhere")));
}

#[test]
fn test_missing_app_dir_is_an_error() {
    let project = FixtureProject::new();
    let config = load_config(&project.manifest("[routes]\napp_dir = \"app\"\n")).unwrap();
    assert!(check::check(&config).is_err());
}
