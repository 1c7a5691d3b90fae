//! CLI value enums and domain type conversions.
//!
//! This module contains the value enums used for CLI argument parsing
//! and their conversions to domain types.

use clap::ValueEnum;

use crate::config::OutputFormat;
use crate::domain::NodeType;
use crate::mermaid::Direction;

/// Node type for the `--include` argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeTypeArg {
    /// Models
    Model,
    /// Sources
    Source,
    /// Seeds
    Seed,
    /// Snapshots
    Snapshot,
    /// Data tests
    Test,
}

impl std::fmt::Display for NodeTypeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&NodeType::from(*self), f)
    }
}

impl From<NodeTypeArg> for NodeType {
    fn from(arg: NodeTypeArg) -> Self {
        match arg {
            NodeTypeArg::Model => NodeType::Model,
            NodeTypeArg::Source => NodeType::Source,
            NodeTypeArg::Seed => NodeType::Seed,
            NodeTypeArg::Snapshot => NodeType::Snapshot,
            NodeTypeArg::Test => NodeType::Test,
        }
    }
}

/// Output format for the `--format` argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatArg {
    /// Fenced Mermaid flowchart
    #[default]
    Mermaid,
}

impl std::fmt::Display for FormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mermaid => write!(f, "mermaid"),
        }
    }
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Mermaid => OutputFormat::Mermaid,
        }
    }
}

/// Flowchart direction for the `--direction` argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectionArg {
    /// Left to right
    #[default]
    #[value(name = "LR", alias = "lr")]
    Lr,
    /// Right to left
    #[value(name = "RL", alias = "rl")]
    Rl,
    /// Top to bottom
    #[value(name = "TB", alias = "tb")]
    Tb,
    /// Top down
    #[value(name = "TD", alias = "td")]
    Td,
    /// Bottom to top
    #[value(name = "BT", alias = "bt")]
    Bt,
}

impl std::fmt::Display for DirectionArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Direction::from(*self).keyword())
    }
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Lr => Direction::LeftRight,
            DirectionArg::Rl => Direction::RightLeft,
            DirectionArg::Tb => Direction::TopBottom,
            DirectionArg::Td => Direction::TopDown,
            DirectionArg::Bt => Direction::BottomTop,
        }
    }
}
