use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, ensure, Context};
use clap::Args;
use jonbkit_jonbin::{
    document::{json_path_for, CollisionDocument},
    format, Jonbin,
};
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Args)]
pub struct Extract {
    /// Collision box .jonbin files, or directories to search for them.
    #[clap(required = true)]
    paths: Vec<PathBuf>,

    /// Where to write the document. Only allowed when converting a single file.
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Indent the JSON output.
    #[clap(long)]
    pretty: bool,
}

pub fn extract(options: &Extract) -> anyhow::Result<()> {
    let inputs = collect_inputs(&options.paths)?;

    if let Some(output) = &options.output {
        ensure!(
            options.paths.len() == 1 && options.paths[0].is_file(),
            "--output can only be used with a single input file"
        );
        return convert(&inputs[0], output, options.pretty);
    }

    if inputs.is_empty() {
        info!("No .{} files found", format::JONBIN_EXTENSION);
    }
    for input in &inputs {
        convert(input, &json_path_for(input), options.pretty)?;
    }

    Ok(())
}

fn collect_inputs(paths: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut inputs = vec![];
    for path in paths {
        if !path.exists() {
            bail!("invalid file path {path:?}: does not exist");
        }
        if path.is_dir() {
            debug!(?path, "Searching directory");
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry.with_context(|| format!("cannot walk directory {path:?}"))?;
                if entry.file_type().is_file() && is_jonbin(entry.path()) {
                    inputs.push(entry.into_path());
                }
            }
        } else {
            inputs.push(path.clone());
        }
    }
    Ok(inputs)
}

fn is_jonbin(path: &Path) -> bool {
    path.extension()
        .map_or(false, |extension| extension == format::JONBIN_EXTENSION)
}

fn convert(input: &Path, output: &Path, pretty: bool) -> anyhow::Result<()> {
    debug!(?input, "Reading jonbin");
    let buffer = fs::read(input).with_context(|| format!("cannot read {input:?}"))?;

    let jonbin = Jonbin::parse(&buffer).with_context(|| format!("cannot decode {input:?}"))?;
    let document = CollisionDocument::from_jonbin(&jonbin)
        .with_context(|| format!("unexpected image list in {input:?}"))?;

    let json = document
        .to_json(pretty)
        .with_context(|| format!("cannot serialize document for {input:?}"))?;
    fs::write(output, json).with_context(|| format!("cannot write document to {output:?}"))?;

    info!(
        hurtboxes = document.hurtboxes.len(),
        hitboxes = document.hitboxes.len(),
        "Wrote {output:?}"
    );
    Ok(())
}
