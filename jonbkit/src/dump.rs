use std::{fs, path::Path};

use anyhow::Context;
use clap::Subcommand;
use jonbkit_jonbin::{document::CollisionDocument, Jonbin};
use tracing::{debug, info};

#[derive(Clone, Copy, Subcommand)]
pub enum Dump {
    /// Dump the image names listed in the header.
    Header,
    /// Dump the record counts.
    Counts,
    /// Dump the sprite geometry chunks.
    Chunks,
    /// Dump all three box collections, including the unknown boxes.
    Boxes,
    /// Dump the JSON document `extract` would write, without checking the image list.
    Document,
}

pub fn dump(filename: &Path, what: Dump) -> anyhow::Result<()> {
    info!(?filename, "Opening jonbin");
    let buffer = fs::read(filename).with_context(|| format!("cannot read {filename:?}"))?;

    debug!("Decoding {} bytes", buffer.len());
    let jonbin = Jonbin::parse(&buffer).context("cannot decode jonbin")?;

    match what {
        Dump::Header => {
            for (i, name) in jonbin.image_names().enumerate() {
                println!("{i:4} {name:?}");
            }
        }
        Dump::Counts => println!("{:#?}", jonbin.counts),
        Dump::Chunks => {
            for (i, chunk) in jonbin.chunks.iter().enumerate() {
                println!("{i:4} {chunk:?}");
            }
        }
        Dump::Boxes => {
            for (kind, boxes) in [
                ("hurtbox", &jonbin.hurtboxes),
                ("hitbox", &jonbin.hitboxes),
                ("unknown", &jonbin.unknown_boxes),
            ] {
                for (i, collision_box) in boxes.iter().enumerate() {
                    println!("{kind:8} {i:4} {collision_box:?}");
                }
            }
        }
        Dump::Document => {
            let document = CollisionDocument::from_jonbin_unchecked(&jonbin);
            println!("{}", document.to_json(true)?);
        }
    }

    Ok(())
}
