//! Mermaid flowchart builder.
//!
//! [`MermaidDiagram`] accumulates edge and style lines and serializes them
//! into a fenced block:
//!
//! ~~~text
//! ```mermaid
//! graph LR
//! 	model.a --> model.b
//! 	style model.a fill:#355E3B
//! ```
//! ~~~
//!
//! Edges and styles are sets keyed by their formatted line, so adding the same
//! edge or style twice renders it once. Lines are emitted in sorted order.
//!
//! Mermaid reserves `end` as a keyword, so any node name ending in `end` is
//! written with a trailing underscore. The rewrite happens in
//! [`escape_node_id`], applied to every node name entering either set.

use crate::error::{Error, Result};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Opening fence of the rendered block
pub const HEADER: &str = "```mermaid";

/// Closing fence of the rendered block
pub const FOOTER: &str = "```";

/// Fill color for a node style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillColor {
    /// Failed node
    Red,
    /// Successful node
    Green,
}

impl FillColor {
    /// Hex value written into the style directive
    pub fn hex(self) -> &'static str {
        match self {
            FillColor::Red => "#FF5733",
            FillColor::Green => "#355E3B",
        }
    }

    /// Green for the `success` status, red for anything else.
    pub fn for_status(status: &str) -> Self {
        if status == crate::domain::SUCCESS_STATUS {
            FillColor::Green
        } else {
            FillColor::Red
        }
    }
}

impl fmt::Display for FillColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillColor::Red => write!(f, "red"),
            FillColor::Green => write!(f, "green"),
        }
    }
}

impl FromStr for FillColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("red") {
            Ok(FillColor::Red)
        } else if s.eq_ignore_ascii_case("green") {
            Ok(FillColor::Green)
        } else {
            Err(Error::UnsupportedColor(s.to_string()))
        }
    }
}

/// Flowchart direction written on the line after the opening fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Left to right
    #[default]
    LeftRight,
    /// Right to left
    RightLeft,
    /// Top to bottom
    TopBottom,
    /// Top down (alias of top to bottom in Mermaid)
    TopDown,
    /// Bottom to top
    BottomTop,
}

impl Direction {
    /// Mermaid keyword for the direction
    pub fn keyword(self) -> &'static str {
        match self {
            Direction::LeftRight => "LR",
            Direction::RightLeft => "RL",
            Direction::TopBottom => "TB",
            Direction::TopDown => "TD",
            Direction::BottomTop => "BT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "graph {}", self.keyword())
    }
}

/// Rewrite a node name so Mermaid does not read a trailing `end` as a keyword.
pub fn escape_node_id(id: &str) -> Cow<'_, str> {
    if id.ends_with("end") {
        Cow::Owned(format!("{id}_"))
    } else {
        Cow::Borrowed(id)
    }
}

/// A Mermaid flowchart under construction.
///
/// Build one per render; [`MermaidDiagram::render`] does not consume or clear
/// the accumulated lines.
#[derive(Debug, Clone, Default)]
pub struct MermaidDiagram {
    direction: Direction,
    edges: BTreeSet<String>,
    styles: BTreeSet<String>,
}

impl MermaidDiagram {
    /// Create an empty left-to-right diagram
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty diagram with the given direction
    pub fn with_direction(direction: Direction) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    /// Add an edge `from --> to`.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        let line = format!("{} --> {}", escape_node_id(from), escape_node_id(to));
        self.edges.insert(line);
    }

    /// Add a style for `node`, parsing `color` case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedColor`] for anything other than `red` or
    /// `green`. The diagram is left unchanged.
    pub fn add_style(&mut self, node: &str, color: &str) -> Result<()> {
        let color = color.parse::<FillColor>()?;
        self.add_fill(node, color);
        Ok(())
    }

    /// Add a style for `node` with an already-resolved color.
    pub fn add_fill(&mut self, node: &str, color: FillColor) {
        let line = format!("style {} fill:{}", escape_node_id(node), color.hex());
        self.styles.insert(line);
    }

    /// Flowchart direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Accumulated edge lines, sorted
    pub fn edges(&self) -> impl Iterator<Item = &str> {
        self.edges.iter().map(String::as_str)
    }

    /// Accumulated style lines, sorted
    pub fn styles(&self) -> impl Iterator<Item = &str> {
        self.styles.iter().map(String::as_str)
    }

    /// Whether the diagram has no edges and no styles
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty() && self.styles.is_empty()
    }

    /// Render the fenced Mermaid block, ending with a newline.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MermaidDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        writeln!(f, "{}", self.direction)?;
        for line in self.edges.iter().chain(&self.styles) {
            writeln!(f, "\t{line}")?;
        }
        writeln!(f, "{FOOTER}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("model.backend", "model.backend_")]
    #[case("model.end", "model.end_")]
    #[case("end", "end_")]
    #[case("model.ending", "model.ending")]
    #[case("model.end_", "model.end_")]
    #[case("model.END", "model.END")]
    #[case("model.a", "model.a")]
    fn test_escape_node_id(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_node_id(input), expected);
    }

    #[test]
    fn test_escape_is_stable_once_applied() {
        let once = escape_node_id("model.frontend").into_owned();
        assert_eq!(escape_node_id(&once), once);
    }

    #[rstest]
    #[case("red", FillColor::Red)]
    #[case("RED", FillColor::Red)]
    #[case("Green", FillColor::Green)]
    #[case("gReEn", FillColor::Green)]
    fn test_fill_color_parses_case_insensitively(#[case] input: &str, #[case] expected: FillColor) {
        assert_eq!(input.parse::<FillColor>().unwrap(), expected);
    }

    #[rstest]
    #[case("success", "#355E3B")]
    #[case("error", "#FF5733")]
    #[case("fail", "#FF5733")]
    #[case("skipped", "#FF5733")]
    #[case("SUCCESS", "#FF5733")]
    fn test_fill_color_for_status(#[case] status: &str, #[case] hex: &str) {
        assert_eq!(FillColor::for_status(status).hex(), hex);
    }

    #[test]
    fn test_duplicate_edge_renders_once() {
        let mut diagram = MermaidDiagram::new();
        diagram.add_edge("model.a", "model.b");
        diagram.add_edge("model.a", "model.b");

        let rendered = diagram.render();
        assert_eq!(rendered.matches("model.a --> model.b").count(), 1);
        assert_eq!(diagram.edges().count(), 1);
    }

    #[test]
    fn test_reversed_edge_is_distinct() {
        let mut diagram = MermaidDiagram::new();
        diagram.add_edge("model.a", "model.b");
        diagram.add_edge("model.b", "model.a");

        assert_eq!(diagram.edges().count(), 2);
    }

    #[test]
    fn test_edge_endpoints_are_escaped() {
        let mut diagram = MermaidDiagram::new();
        diagram.add_edge("model.backend", "model.frontend");

        assert_eq!(
            diagram.edges().collect::<Vec<_>>(),
            vec!["model.backend_ --> model.frontend_"]
        );
    }

    #[test]
    fn test_style_uses_same_escaping_as_edges() {
        let mut diagram = MermaidDiagram::new();
        diagram.add_edge("model.a", "model.backend");
        diagram.add_style("model.backend", "green").unwrap();

        let rendered = diagram.render();
        assert!(rendered.contains("\tmodel.a --> model.backend_\n"));
        assert!(rendered.contains("\tstyle model.backend_ fill:#355E3B\n"));
        assert!(!rendered.contains("style model.backend fill"));
    }

    #[test]
    fn test_add_style_rejects_unknown_color() {
        let mut diagram = MermaidDiagram::new();
        diagram.add_style("model.a", "red").unwrap();

        let err = diagram.add_style("model.b", "blue").unwrap_err();

        assert!(matches!(err, Error::UnsupportedColor(ref c) if c == "blue"));
        assert_eq!(err.to_string(), "Color blue not supported");
        assert_eq!(
            diagram.styles().collect::<Vec<_>>(),
            vec!["style model.a fill:#FF5733"]
        );
    }

    #[test]
    fn test_duplicate_style_renders_once() {
        let mut diagram = MermaidDiagram::new();
        diagram.add_fill("model.a", FillColor::Green);
        diagram.add_style("model.a", "GREEN").unwrap();

        assert_eq!(diagram.styles().count(), 1);
    }

    #[test]
    fn test_conflicting_styles_are_both_kept() {
        let mut diagram = MermaidDiagram::new();
        diagram.add_fill("model.a", FillColor::Green);
        diagram.add_fill("model.a", FillColor::Red);

        assert_eq!(
            diagram.styles().collect::<Vec<_>>(),
            vec!["style model.a fill:#355E3B", "style model.a fill:#FF5733"]
        );
    }

    #[test]
    fn test_render_empty_diagram() {
        let diagram = MermaidDiagram::new();

        assert!(diagram.is_empty());
        assert_eq!(diagram.render(), "```mermaid\ngraph LR\n```\n");
    }

    #[test]
    fn test_render_orders_edges_before_styles() {
        let mut diagram = MermaidDiagram::new();
        diagram.add_fill("model.b", FillColor::Red);
        diagram.add_edge("model.b", "model.c");
        diagram.add_fill("model.a", FillColor::Green);
        diagram.add_edge("model.a", "model.b");

        assert_eq!(
            diagram.render(),
            "```mermaid\n\
             graph LR\n\
             \tmodel.a --> model.b\n\
             \tmodel.b --> model.c\n\
             \tstyle model.a fill:#355E3B\n\
             \tstyle model.b fill:#FF5733\n\
             ```\n"
        );
    }

    #[test]
    fn test_render_is_repeatable() {
        let mut diagram = MermaidDiagram::new();
        diagram.add_edge("model.a", "model.b");
        diagram.add_fill("model.a", FillColor::Green);

        assert_eq!(diagram.render(), diagram.render());
    }

    #[rstest]
    #[case(Direction::LeftRight, "graph LR")]
    #[case(Direction::RightLeft, "graph RL")]
    #[case(Direction::TopBottom, "graph TB")]
    #[case(Direction::TopDown, "graph TD")]
    #[case(Direction::BottomTop, "graph BT")]
    fn test_render_direction_line(#[case] direction: Direction, #[case] line: &str) {
        let diagram = MermaidDiagram::with_direction(direction);

        assert_eq!(diagram.render().lines().nth(1), Some(line));
    }
}
