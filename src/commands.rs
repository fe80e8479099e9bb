use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::automaton::{Automaton, BuildOptions, load_from_file, split_symbols};
use crate::cli::{Cli, Command};
use crate::config::FsaConfig;
use crate::render::Renderer;
use crate::report::EvaluationRecord;
use crate::ui::{self, RenderProgress};

/// Everything the `run` pipeline needs, resolved from config and flags.
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub input: PathBuf,
    pub example: String,
    pub separator: Option<String>,
    pub output: PathBuf,
    pub view: bool,
    pub options: BuildOptions,
    pub renderer: Renderer,
}

impl Pipeline {
    /// Load the automaton, evaluate the example string, print the verdict
    /// and render the diagram. Returns whether the example was accepted.
    ///
    /// Nothing is evaluated or drawn if the automaton fails to load.
    pub fn execute(&self) -> Result<bool> {
        let automaton = load(&self.input, &self.options)?;

        let symbols = split_symbols(&self.example, self.separator.as_deref());
        let run = automaton.run(&symbols);
        ui::print_verdict(&self.example, &run);

        draw(&self.renderer, &automaton, &self.output, self.view)?;
        Ok(run.accepted())
    }
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = FsaConfig::load(cli.config.as_deref()).context("loading configuration")?;
    let options = if cli.lenient {
        BuildOptions::lenient()
    } else {
        config.build_options()
    };
    let renderer = config.renderer();

    match cli.command {
        Command::Run {
            input,
            example,
            output,
            separator,
            no_view,
        } => {
            let pipeline = Pipeline {
                input: input.unwrap_or_else(|| config.input.clone()),
                example: example.unwrap_or_else(|| config.example.clone()),
                separator: separator.or_else(|| config.separator.clone()),
                output: output.unwrap_or_else(|| config.output.clone()),
                view: config.view && !no_view,
                options,
                renderer,
            };
            pipeline.execute()?;
        }
        Command::Check { file } => {
            let automaton = load(&file, &options)?;
            ui::print_summary(&file, &automaton);
        }
        Command::Eval {
            file,
            inputs,
            separator,
            json,
        } => {
            let automaton = load(&file, &options)?;
            let separator = separator.or_else(|| config.separator.clone());
            let records = evaluate(&automaton, &inputs, separator.as_deref(), !json);
            if json {
                ui::print_records(&records).context("serializing evaluation records")?;
            }
        }
        Command::Render {
            file,
            output,
            no_view,
        } => {
            let automaton = load(&file, &options)?;
            let output = output.unwrap_or_else(|| config.output.clone());
            draw(&renderer, &automaton, &output, config.view && !no_view)?;
        }
    }

    Ok(())
}

fn load(path: &Path, options: &BuildOptions) -> Result<Automaton> {
    load_from_file(path, options)
        .with_context(|| format!("loading automaton from {}", path.display()))
}

// Evaluate every input, optionally printing each verdict as it is computed.
fn evaluate(
    automaton: &Automaton,
    inputs: &[String],
    separator: Option<&str>,
    print: bool,
) -> Vec<EvaluationRecord> {
    inputs
        .iter()
        .map(|input| {
            let symbols = split_symbols(input, separator);
            let run = automaton.run(&symbols);
            if print {
                ui::print_verdict(input, &run);
            }
            EvaluationRecord::new(input, symbols, &run)
        })
        .collect()
}

fn draw(renderer: &Renderer, automaton: &Automaton, output: &Path, view: bool) -> Result<()> {
    let progress = RenderProgress::start(output);
    if let Err(err) = renderer.render(automaton, output) {
        progress.abandon();
        return Err(err).with_context(|| format!("rendering to {}", output.display()));
    }
    progress.finish(output);

    if view {
        info!("opening viewer for {}", output.display());
        renderer.show(output)?;
    }
    Ok(())
}
