// Warning groups (as of rust 1.55)
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2021_compatibility,
    rust_2018_idioms,
    unused
)]
// Other warnings (as of rust 1.55)
#![deny(
    bindings_with_variant_name,
    confusable_idents,
    const_item_mutation,
    deprecated,
    elided_lifetimes_in_paths,
    exported_private_dependencies,
    irrefutable_let_patterns,
    non_shorthand_field_patterns,
    renamed_and_removed_lints,
    trivial_bounds,
    type_alias_bounds,
    unconditional_recursion,
    unknown_lints,
    unused_comparisons,
    while_true
)]

use anyhow::{Context, Result};
use log::warn;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::Path;
use std::sync::OnceLock;

const PARAMETERS_FILE_NAME: &str = "chart_parameters.toml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
struct Parameters {
    /// Width of every rendered chart, in pixels.
    chart_width: usize,
    /// Height of every rendered chart, in pixels.
    chart_height: usize,
    /// Font family of the chart title.
    title_font_family: Cow<'static, str>,
    /// Font size of the chart title.
    title_font_size: usize,
    /// Horizontal title offset, as a fraction of the plotting area.
    title_x: f64,
    /// Colour used for a project that has no entry in the colour assignment.
    fallback_color: Cow<'static, str>,
}

const DEFAULT_PARAMETERS: Parameters = Parameters {
    chart_width: 600,
    chart_height: 600,
    title_font_family: Cow::Borrowed("Droid Sans"),
    title_font_size: 16,
    title_x: 0.05,
    fallback_color: Cow::Borrowed("#7f7f7f"),
};

impl Default for Parameters {
    fn default() -> Self {
        DEFAULT_PARAMETERS
    }
}

static PARAMETERS: OnceLock<Result<Parameters>> = OnceLock::new();

fn load(path: &Path) -> Result<Parameters> {
    let s = std::fs::read_to_string(path).with_context(|| path.display().to_string())?;
    toml::from_str(&s).with_context(|| path.display().to_string())
}

/// Return a reference to the global parameters.
/// The parameters may need to be loaded; if loading fails, return Err.
fn parameters() -> &'static Result<Parameters> {
    PARAMETERS.get_or_init(|| {
        let path = std::env::current_exe()
            .context("Unable to locate the running executable")?
            .with_file_name(PARAMETERS_FILE_NAME);
        if !path.exists() {
            warn!(
                "could not find {PARAMETERS_FILE_NAME} at {}, falling back to defaults",
                path.display()
            );
            Ok(DEFAULT_PARAMETERS)
        } else {
            load(&path)
        }
    })
}

macro_rules! parameter_getter {
    ($a:ident, $t:ty) => {
        pub fn $a() -> Result<&'static $t> {
            let val = match parameters() {
                Err(e) => return Err(anyhow::anyhow!("{e:#}")),
                Ok(p) => &p.$a,
            };
            if DEFAULT_PARAMETERS.$a != *val {
                warn!("using non-default {} = {:?}", stringify!($a), val);
            }
            Ok(val)
        }
    };
}

parameter_getter!(chart_width, usize);
parameter_getter!(chart_height, usize);
parameter_getter!(title_font_family, str);
parameter_getter!(title_font_size, usize);
parameter_getter!(title_x, f64);
parameter_getter!(fallback_color, str);
