use std::io::Write;

use anyhow::{Context, Result};

use render::Palette;
use stack::{DataSource, Snapshot};

use crate::settings::Settings;
use crate::ui::Ui;

/// This struct actually runs the command-line app.
pub struct App {
    /// Interpreted command line settings
    settings: Settings,
    /// User interface
    ui: Ui,
}

impl App {
    /// Create a new `App`.
    pub fn new(settings: Settings) -> Self {
        let ui = Ui::new(&settings);
        Self { settings, ui }
    }

    /// Run the app: load the snapshot, render the requested stack, and write it out.
    pub fn run(mut self) -> Result<()> {
        let source = self.load_snapshot()?;
        let dot = self.render_stack(&source)?;
        self.write_output(&dot)
    }

    /// Render the requested stack from `source` as dot text.
    pub fn render_stack<S: DataSource + ?Sized>(&mut self, source: &S) -> Result<String> {
        self.ui.verbose_progress_debug("Looking up stack", &self.settings.stack);
        let root = stack::find_stack(source, &self.settings.stack)?;
        self.ui.done();
        log::info!("found stack {} with id {}", root.name, root.id);

        self.ui.verbose_progress("Building graph");
        self.ui.start_timer();
        let graph = traverse::build(source, root, self.settings.recursive)
            .context("while building stack graph")?;
        self.ui.done();
        self.ui.print_elapsed("Building graph")?;

        let dangling = graph.dangling_edges().count();
        if dangling > 0 {
            log::info!("{dangling} edges point at resources outside the graph");
        }
        self.ui.verbose_msg(&format!(
            "Graph has {} resources and {} dependencies.",
            graph.len(),
            graph.edges().len(),
        ));

        let palette = Palette::assign(graph.resource_types(), self.settings.palette);
        log::debug!("palette has {} colors", palette.len());

        log::info!("generating output");
        let dot = render::render(&graph, &palette, self.settings.mode)?;
        Ok(dot)
    }

    fn load_snapshot(&self) -> Result<Snapshot> {
        self.ui.verbose_progress_debug("Reading snapshot", &self.settings.snapshot);
        let snapshot = Snapshot::load(&self.settings.snapshot)
            .with_context(|| format!("while reading snapshot {:?}", self.settings.snapshot))?;
        self.ui.done();
        log::debug!("snapshot contains {} stacks", snapshot.len());
        Ok(snapshot)
    }

    fn write_output(&self, dot: &str) -> Result<()> {
        match &self.settings.output {
            Some(path) => {
                log::info!("writing graph to {path:?}");
                std::fs::write(path, dot)
                    .with_context(|| format!("while writing graph to {path:?}"))?;
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(dot.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}
