//! Per-frame orchestration
//!
//! [`App::frame`] runs one complete frame: build the tree from the
//! caller's declarations, lay it out, route the sampled input, hit-test
//! for the overlay, draw, and drop the whole tree. Nothing carries over
//! except the frame counter.

use std::time::{Duration, Instant};

use strobe_core::{InputSnapshot, InputSource, Painter, Style, TextMeasurer};
use strobe_layout::{build_root, hit_description, tree_to_string, Node, Ui};
use tracing::debug;

use crate::error::Result;
use crate::fonts::{EstimatedMeasurer, FontMeasurer};

/// Driver configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Capture an indented tree dump into each frame's report.
    pub dump_tree: bool,
    /// Style of the implicit top-level vertical container.
    pub root_style: Style,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dump_tree: false,
            root_style: Style::new(),
        }
    }
}

/// What one frame did.
#[derive(Debug, Clone)]
pub struct FrameReport {
    /// Frame counter, starting at zero.
    pub frame: u64,
    /// Nodes in this frame's tree, root included.
    pub node_count: usize,
    /// Description of the node under the pointer, if any.
    pub hit: Option<String>,
    /// Indented tree dump, present when the config asks for it.
    pub tree: Option<String>,
    /// Wall-clock time the frame took.
    pub elapsed: Duration,
}

/// The frame driver. Owns the text measurer labels size themselves
/// against and the frame counter; everything else lives for one
/// [`frame`](App::frame) call and dies with it.
pub struct App {
    fonts: Box<dyn TextMeasurer>,
    config: AppConfig,
    frame: u64,
}

impl App {
    /// Driver with the estimating measurer. Layout will be proportional
    /// but not glyph-accurate; use [`with_system_fonts`](Self::with_system_fonts)
    /// or [`with_fonts`](Self::with_fonts) for real metrics.
    pub fn new(config: AppConfig) -> Self {
        Self::with_fonts(config, Box::new(EstimatedMeasurer))
    }

    /// Driver measuring through the given measurer.
    pub fn with_fonts(config: AppConfig, fonts: Box<dyn TextMeasurer>) -> Self {
        Self {
            fonts,
            config,
            frame: 0,
        }
    }

    /// Driver measuring through a face found on this system.
    pub fn with_system_fonts(config: AppConfig) -> Result<Self> {
        let fonts = FontMeasurer::system()?;
        Ok(Self::with_fonts(config, Box::new(fonts)))
    }

    /// Run one frame.
    ///
    /// Phases, in order: build the tree from `build`, lay it out from
    /// the root, sample `input` once and route it, hit-test the pointer
    /// for the overlay, draw into `painter`, and report. The tree is
    /// dropped before this returns; the next frame starts from nothing.
    pub fn frame(
        &mut self,
        painter: &mut dyn Painter,
        input: &dyn InputSource,
        build: impl FnOnce(&mut Ui<'_>),
    ) -> FrameReport {
        let started = Instant::now();

        let mut root = build_root(self.fonts.as_ref(), self.config.root_style, build);
        root.layout();

        // Input and hit testing both read the rects layout just wrote.
        let snapshot = InputSnapshot::capture(input);
        root.handle_input(&snapshot);
        root.debug_hit_test(snapshot.pointer);

        root.draw(painter);

        let report = FrameReport {
            frame: self.frame,
            node_count: count_nodes(root.as_ref()),
            hit: hit_description(root.as_ref()),
            tree: self
                .config
                .dump_tree
                .then(|| tree_to_string(root.as_ref())),
            elapsed: started.elapsed(),
        };

        debug!(
            frame = report.frame,
            nodes = report.node_count,
            hit = report.hit.as_deref().unwrap_or("-"),
            "frame complete"
        );

        self.frame += 1;
        report
    }
}

fn count_nodes(node: &dyn Node) -> usize {
    let mut count = 1;
    node.visit_children(&mut |child| count += count_nodes(child));
    count
}
