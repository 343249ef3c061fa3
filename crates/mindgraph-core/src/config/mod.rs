//! Typed build options.
//!
//! Every option the graph builder understands is a field here, with its default. Deserializing
//! from JSON/YAML rejects unknown keys so misspelled options surface as errors instead of being
//! silently ignored.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{Error, Result};

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $text:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text $(, alias = $alias)*)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                let t = s.trim();
                $(
                    if t.eq_ignore_ascii_case($text) $(|| t.eq_ignore_ascii_case($alias))* {
                        return Ok($name::$variant);
                    }
                )+
                Err(Error::UnknownKeyword {
                    kind: $kind,
                    value: s.to_string(),
                    expected: Self::ALL
                        .iter()
                        .map(|v| v.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                })
            }
        }
    };
}

keyword_enum! {
    /// Layout direction (`rankdir`). Accepts both the short code and the long UI label.
    #[derive(Default)]
    pub enum Orientation ("orientation") {
        #[default]
        LeftRight => "LR" | "Left-Right (LR)",
        TopBottom => "TB" | "Top-Bottom (TB)",
        RightLeft => "RL" | "Right-Left (RL)",
        BottomTop => "BT" | "Bottom-Top (BT)",
    }
}

keyword_enum! {
    #[derive(Default)]
    pub enum NodeShape ("node shape") {
        #[default]
        Box => "box",
        Ellipse => "ellipse",
        Circle => "circle",
        Diamond => "diamond",
        Hexagon => "hexagon",
    }
}

keyword_enum! {
    #[derive(Default)]
    pub enum LineStyle ("edge style") {
        #[default]
        Solid => "solid",
        Dashed => "dashed",
        Dotted => "dotted",
        Bold => "bold",
    }
}

keyword_enum! {
    /// Graphviz layout engine the renderer should use.
    #[derive(Default)]
    pub enum LayoutEngine ("layout engine") {
        #[default]
        Dot => "dot",
        Neato => "neato",
        Fdp => "fdp",
        Sfdp => "sfdp",
        Twopi => "twopi",
        Circo => "circo",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeStyle {
    pub fill_color: String,
    pub border_color: String,
    pub border_width: u32,
    pub shape: NodeShape,
    pub font: String,
    pub font_size: u32,
    pub font_color: String,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            fill_color: "#ADD8E6".to_string(),
            border_color: "#000000".to_string(),
            border_width: 2,
            shape: NodeShape::Box,
            font: "Helvetica".to_string(),
            font_size: 12,
            font_color: "#000000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EdgeStyle {
    pub color: String,
    pub style: LineStyle,
    pub arrow_size: f64,
    pub font_color: String,
    pub font_size: u32,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            color: "#888888".to_string(),
            style: LineStyle::Solid,
            arrow_size: 1.0,
            font_color: "#333333".to_string(),
            font_size: 12,
        }
    }
}

/// Search highlight: nodes whose label contains `term` (case-insensitive) get `fill_color`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Highlight {
    pub term: Option<String>,
    pub fill_color: String,
}

impl Default for Highlight {
    fn default() -> Self {
        Self {
            term: None,
            fill_color: "#FFD700".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Watermark {
    pub enabled: bool,
    pub text: String,
}

impl Default for Watermark {
    fn default() -> Self {
        Self {
            enabled: false,
            text: "MindMap Generator".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphOptions {
    pub orientation: Orientation,
    /// Items at depth `>= max_depth` are dropped.
    pub max_depth: usize,
    /// Replaces the label of every depth-0 item when non-empty.
    pub custom_root: Option<String>,
    pub hide_leaf_nodes: bool,
    pub node: NodeStyle,
    pub edge: EdgeStyle,
    pub background_color: String,
    pub highlight: Highlight,
    pub engine: LayoutEngine,
    pub watermark: Watermark,
    /// Topic the outline was requested for; recorded as a comment in the DOT output.
    pub topic: Option<String>,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::LeftRight,
            max_depth: 5,
            custom_root: None,
            hide_leaf_nodes: false,
            node: NodeStyle::default(),
            edge: EdgeStyle::default(),
            background_color: "#FFFFFF".to_string(),
            highlight: Highlight::default(),
            engine: LayoutEngine::Dot,
            watermark: Watermark::default(),
            topic: None,
        }
    }
}

impl GraphOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates options from a JSON object. Missing keys keep their defaults.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(text).map_err(|e| Error::InvalidOptionsJson {
            message: e.to_string(),
        })?;
        options.validate()?;
        Ok(options)
    }

    /// Parses and validates options from a YAML mapping. Missing keys keep their defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let options: Self = serde_yaml::from_str(text).map_err(|e| Error::InvalidOptionsYaml {
            message: e.to_string(),
        })?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::InvalidOption {
                option: "max_depth",
                message: "must be a positive integer".to_string(),
            });
        }
        if !self.edge.arrow_size.is_finite() || self.edge.arrow_size <= 0.0 {
            return Err(Error::InvalidOption {
                option: "edge.arrow_size",
                message: format!("must be a positive number, got {}", self.edge.arrow_size),
            });
        }
        Ok(())
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_custom_root(mut self, custom_root: impl Into<String>) -> Self {
        self.custom_root = Some(custom_root.into());
        self
    }

    pub fn with_hide_leaf_nodes(mut self, hide: bool) -> Self {
        self.hide_leaf_nodes = hide;
        self
    }

    pub fn with_highlight(mut self, term: impl Into<String>) -> Self {
        self.highlight.term = Some(term.into());
        self
    }

    pub fn with_engine(mut self, engine: LayoutEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_watermark(mut self, text: impl Into<String>) -> Self {
        self.watermark = Watermark {
            enabled: true,
            text: text.into(),
        };
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// `Mind Map for <topic>`, if a non-blank topic is set.
    pub fn graph_comment(&self) -> Option<String> {
        let topic = self.topic.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some(format!("Mind Map for {topic}"))
    }

    /// The custom root label, if one is set and non-empty.
    pub fn custom_root_label(&self) -> Option<&str> {
        self.custom_root.as_deref().filter(|s| !s.is_empty())
    }

    /// The highlight search term, if one is set and non-empty.
    pub fn highlight_term(&self) -> Option<&str> {
        self.highlight.term.as_deref().filter(|s| !s.is_empty())
    }

    /// The watermark caption; requires both the toggle and a non-empty text.
    pub fn watermark_text(&self) -> Option<&str> {
        if !self.watermark.enabled || self.watermark.text.is_empty() {
            return None;
        }
        Some(self.watermark.text.as_str())
    }
}
