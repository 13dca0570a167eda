#![forbid(unsafe_code)]

//! Template rendering and output layout.
//!
//! Templates are embedded at compile time and parameterized by three
//! tokens: `TAGNAME` (the kebab-case tag), `CLASSNAME` (the UpperCamel
//! type name), and `MODNAME` (the snake_case module name).

use anyhow::{Context, bail};
use std::fs;
use std::path::Path;

const COMPONENT_TEMPLATE: &str = include_str!("../templates/component.rs.tpl");
const COMPONENT_TEST_TEMPLATE: &str = include_str!("../templates/component_test.rs.tpl");
const MODAL_TEMPLATE: &str = include_str!("../templates/modal.rs.tpl");
const MODAL_TEST_TEMPLATE: &str = include_str!("../templates/modal_test.rs.tpl");

/// What kind of skeleton to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Component,
    Modal,
}

impl Kind {
    fn templates(self) -> [(&'static str, &'static str); 2] {
        match self {
            Kind::Component => [
                ("mod.rs", COMPONENT_TEMPLATE),
                ("tests.rs", COMPONENT_TEST_TEMPLATE),
            ],
            Kind::Modal => [("mod.rs", MODAL_TEMPLATE), ("tests.rs", MODAL_TEST_TEMPLATE)],
        }
    }
}

/// Validate a kebab-case tag name: lowercase segments separated by
/// single dashes, starting with a letter.
pub fn validate_tag(tag: &str) -> anyhow::Result<()> {
    let valid = !tag.is_empty()
        && tag.starts_with(|c: char| c.is_ascii_lowercase())
        && !tag.ends_with('-')
        && !tag.contains("--")
        && tag
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid {
        bail!("tag name must be kebab-case (got {tag:?})");
    }
    Ok(())
}

/// `confirm-box` -> `ConfirmBox`.
pub fn type_name(tag: &str) -> String {
    tag.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// `confirm-box` -> `confirm_box`.
pub fn module_name(tag: &str) -> String {
    tag.replace('-', "_")
}

/// Substitute the template tokens for a given tag.
pub fn render(template: &str, tag: &str) -> String {
    template
        .replace("CLASSNAME", &type_name(tag))
        .replace("TAGNAME", tag)
        .replace("MODNAME", &module_name(tag))
}

/// Generate a skeleton for `tag` under `out_dir`, or print it to stdout
/// when `out_dir` is `None` (dry run).
pub fn generate(kind: Kind, tag: &str, out_dir: Option<&Path>) -> anyhow::Result<()> {
    validate_tag(tag)?;

    let Some(out_dir) = out_dir else {
        for (filename, template) in kind.templates() {
            println!("// --- {filename} ---");
            println!("{}", render(template, tag));
        }
        return Ok(());
    };

    let module_dir = out_dir.join(module_name(tag));
    fs::create_dir_all(&module_dir)
        .with_context(|| format!("creating {}", module_dir.display()))?;
    eprintln!("Creating component directory: {}", module_dir.display());

    for (filename, template) in kind.templates() {
        let path = module_dir.join(filename);
        if path.exists() {
            bail!("refusing to overwrite {}", path.display());
        }
        fs::write(&path, render(template, tag))
            .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}
