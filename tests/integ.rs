use anyhow::Result;
use dotstack::{App, Args, PaletteArg, Settings};
use stack::{DataSource, Resource, Snapshot, Stack};
use tempfile::tempdir;

const SNAPSHOT: &str = r#"{
    "stacks": [
        {
            "id": "s1",
            "name": "S1",
            "resources": [
                {"name": "web", "type": "Server", "physical_id": "s2", "required_by": ["db"]},
                {"name": "db", "type": "Server", "physical_id": "abc-123"}
            ]
        },
        {
            "id": "s2",
            "name": "S2",
            "resources": [
                {"name": "vol", "type": "Volume"}
            ]
        }
    ]
}"#;

fn basic_args(snapshot: String, output: String) -> Args {
    Args {
        stack: String::from("s1"),
        snapshot,
        recursive: false,
        colors: false,
        detailed: false,
        palette: PaletteArg::Auto,
        kelly: false,
        output: Some(output),
        verbose: 1,
    }
}

/// Write the snapshot, run the app with `f` applied to the args, and return the output.
fn run_with(f: impl FnOnce(&mut Args)) -> Result<String> {
    simple_logging::log_to_stderr(log::LevelFilter::Trace);
    let dir = tempdir()?;
    let snapshot = dir.path().join("snapshot.json");
    std::fs::write(&snapshot, SNAPSHOT)?;
    let output = dir.path().join("graph.dot");

    let mut args = basic_args(stringify(&snapshot), stringify(&output));
    f(&mut args);
    let settings: Settings = args.try_into()?;
    App::new(settings).run()?;

    let dot = std::fs::read_to_string(&output)?;
    dir.close()?;
    Ok(dot)
}

fn stringify(path: &std::path::Path) -> String {
    path.to_str().unwrap().to_owned()
}

#[test]
fn test_basic() -> Result<()> {
    let dot = run_with(|_| ())?;
    assert_eq!(
        dot,
        "digraph heat_stack_S1 {\n\
         rankdir=LR\n\
         \"s1:db\" [label=\"db\"]\n\
         \"s1:web\" [label=\"web\"]\n\
         \"s1:web\" -> \"s1:db\"\n\
         }\n"
    );
    Ok(())
}

#[test]
fn test_recursive() -> Result<()> {
    let dot = run_with(|args| args.recursive = true)?;
    assert!(dot.contains("\"s2:vol\" [label=\"vol\"]\n"));
    let first_vol = dot.find("s2:vol").unwrap();
    let first_web = dot.find("s1:web").unwrap();
    assert!(first_web < first_vol, "nodes are sorted");
    assert_eq!(dot.matches("->").count(), 1);
    Ok(())
}

#[test]
fn test_lookup_by_name() -> Result<()> {
    let by_name = run_with(|args| args.stack = String::from("S1"))?;
    let by_id = run_with(|_| ())?;
    assert_eq!(by_name, by_id);
    Ok(())
}

#[test]
fn test_unknown_stack() {
    let res = run_with(|args| args.stack = String::from("no-such-stack"));
    let err = res.unwrap_err();
    assert!(format!("{err:?}").contains("Unable to find stack named 'no-such-stack'"));
}

#[test]
fn test_colored_kelly() -> Result<()> {
    let dot = run_with(|args| {
        args.recursive = true;
        args.colors = true;
        args.kelly = true;
    })?;
    // Server and Volume get the first two kelly colors:
    assert!(dot.contains("\"s1:db\" [label=\"db\", style=filled, color=\"#FFB300\"]\n"));
    assert!(dot.contains("\"s2:vol\" [label=\"vol\", style=filled, color=\"#803E75\"]\n"));
    Ok(())
}

#[test]
fn test_detailed() -> Result<()> {
    let dot = run_with(|args| {
        args.colors = true;
        args.detailed = true;
    })?;
    assert!(dot.contains("\"s1:db\" [label=\"db | Server | abc-123\", shape=\"record\"]\n"));
    assert!(dot.contains("\"s1:web\" [label=\"web | Server | s2\", shape=\"record\"]\n"));
    Ok(())
}

/// Snapshot that fails hard on one nested stack lookup.
struct Flaky {
    inner: Snapshot,
    broken: &'static str,
}

impl DataSource for Flaky {
    fn get_stack(&self, ident: &str) -> Result<Stack, stack::Error> {
        self.inner.get_stack(ident)
    }
    fn list_stacks(&self) -> Result<Vec<Stack>, stack::Error> {
        self.inner.list_stacks()
    }
    fn list_resources(&self, stack_id: &str) -> Result<Vec<Resource>, stack::Error> {
        self.inner.list_resources(stack_id)
    }
    fn get_nested_stack(&self, physical_id: &str) -> Result<Stack, stack::Error> {
        if physical_id == self.broken {
            let e = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");
            return Err(e.into());
        }
        self.inner.get_nested_stack(physical_id)
    }
}

fn app_for(snapshot: &std::path::Path, recursive: bool) -> Result<App> {
    let dir = snapshot.parent().unwrap();
    let mut args = basic_args(stringify(snapshot), stringify(&dir.join("unused.dot")));
    args.recursive = recursive;
    Ok(App::new(args.try_into()?))
}

#[test]
fn test_nested_lookup_failure_is_fatal() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, SNAPSHOT)?;

    let flaky = Flaky {
        inner: Snapshot::from_json(SNAPSHOT)?,
        broken: "abc-123",
    };
    let res = app_for(&path, true)?.render_stack(&flaky);
    assert!(res.is_err());

    // without recursion nested stacks are never looked up:
    let dot = app_for(&path, false)?.render_stack(&flaky)?;
    assert!(dot.contains("\"s1:web\" -> \"s1:db\""));
    Ok(())
}
