//! Command-line arguments and commands.

use clap::{Parser, Subcommand, ValueEnum};
use kurbo::Vec2;
use pedigree_core::{Gender, Layout, LayoutError};
use pedigree_render::{RenderStyle, Renderer, StyleError, SvgRenderer};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Style(#[from] StyleError),
}

/// Render family tree layouts to SVG.
#[derive(Debug, Parser)]
#[command(name = "pedigree", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a layout JSON file to an SVG document.
    Render {
        /// Layout file produced by a layout algorithm.
        layout: PathBuf,
        /// Viewport width.
        #[arg(long, default_value_t = 800.0)]
        width: f64,
        /// Viewport height.
        #[arg(long, default_value_t = 600.0)]
        height: f64,
        /// Zoom factor.
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        /// Horizontal pan offset.
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        offset_x: f64,
        /// Vertical pan offset.
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        offset_y: f64,
        /// Style overrides as JSON.
        #[arg(long)]
        style: Option<PathBuf>,
    },
    /// Render a single person icon.
    Icon {
        /// Circle diameter.
        size: f64,
        #[arg(long, value_enum, default_value_t = GenderArg::Other)]
        gender: GenderArg,
        #[arg(long)]
        child: bool,
        #[arg(long)]
        deceased: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
    Other,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
            GenderArg::Other => Gender::Other,
        }
    }
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Run a command and return the SVG markup it produces.
pub fn run(command: Command) -> Result<String, CliError> {
    match command {
        Command::Render {
            layout,
            width,
            height,
            scale,
            offset_x,
            offset_y,
            style,
        } => {
            let layout = Layout::from_json(&read_file(&layout)?)?;
            let style = match style {
                Some(path) => RenderStyle::from_json(&read_file(&path)?)?,
                None => RenderStyle::default(),
            };
            Ok(render_layout(layout, style, width, height, scale, Vec2::new(offset_x, offset_y)))
        }
        Command::Icon {
            size,
            gender,
            child,
            deceased,
        } => {
            let mut renderer = SvgRenderer::new(size, size);
            Ok(renderer
                .create_person_icon(size, gender.into(), child, deceased)
                .to_document()
                .to_string())
        }
    }
}

/// Render `layout` once with the given view settings.
pub fn render_layout(
    layout: Layout,
    style: RenderStyle,
    width: f64,
    height: f64,
    scale: f64,
    offset: Vec2,
) -> String {
    let mut renderer = SvgRenderer::new(width, height).with_style(style);
    renderer.set_scale(scale);
    renderer.set_offset(offset);
    renderer.set_layout(Arc::new(layout));
    renderer.render();
    renderer.to_svg_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use pedigree_core::Person;

    #[test]
    fn test_parse_render_args() {
        let cli = Cli::try_parse_from([
            "pedigree", "render", "tree.json", "--width", "200", "--offset-y", "-3",
        ])
        .unwrap();
        match cli.command {
            Command::Render {
                layout,
                width,
                height,
                offset_y,
                style,
                ..
            } => {
                assert_eq!(layout, PathBuf::from("tree.json"));
                assert!((width - 200.0).abs() < f64::EPSILON);
                assert!((height - 600.0).abs() < f64::EPSILON);
                assert!((offset_y + 3.0).abs() < f64::EPSILON);
                assert!(style.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_icon_args() {
        let cli = Cli::try_parse_from(["pedigree", "icon", "40", "--gender", "female", "--deceased"])
            .unwrap();
        match cli.command {
            Command::Icon {
                size,
                gender,
                child,
                deceased,
            } => {
                assert!((size - 40.0).abs() < f64::EPSILON);
                assert_eq!(gender, GenderArg::Female);
                assert!(!child);
                assert!(deceased);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_run_icon() {
        let svg = run(Command::Icon {
            size: 40.0,
            gender: GenderArg::Female,
            child: false,
            deceased: true,
        })
        .unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="42""#));
        assert!(svg.contains("sex-female"));
    }

    #[test]
    fn test_render_layout() {
        let root = Person::new("Ada", "Lovelace", pedigree_core::Gender::Female, Some(1815), None);
        let mut layout = Layout::new(root.clone(), 20.0);
        layout.place(root, Point::ZERO, 0.0);

        let svg = render_layout(layout, RenderStyle::default(), 200.0, 100.0, 2.0, Vec2::new(5.0, -3.0));
        assert!(svg.contains(r#"transform="translate(100, 50) translate(5, -3) scale(2, 2)""#));
        assert!(svg.contains("Ada Lovelace"));
    }

    #[test]
    fn test_missing_layout_file() {
        let result = run(Command::Render {
            layout: PathBuf::from("/nonexistent/pedigree/layout.json"),
            width: 800.0,
            height: 600.0,
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            style: None,
        });
        assert!(matches!(result, Err(CliError::Io { .. })));
    }
}
