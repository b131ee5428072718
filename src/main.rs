//! HR Attrition Predictor - Main Entry Point
//!
//! Loads the classifier once, then runs the form -> predict -> render loop
//! until the user is done. A model that cannot be loaded is fatal: there is
//! no fallback.

mod constants;
mod logic;
mod ui;

use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use logic::adapter::InferenceAdapter;
use logic::model::AttritionModel;

fn find_model_path() -> Option<PathBuf> {
    constants::model_path_candidates()
        .into_iter()
        .find(|p| p.exists())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{}...", constants::APP_NAME, constants::APP_VERSION);

    let Some(model_path) = find_model_path() else {
        log::error!("No model artifact found in any candidate location");
        eprintln!(
            "Error: no model artifact found. Place the model at ./{}/{} or set ATTRITION_MODEL_PATH.",
            constants::DEFAULT_MODEL_DIR,
            constants::DEFAULT_MODEL_FILE
        );
        return ExitCode::FAILURE;
    };

    let model = match AttritionModel::load(&model_path) {
        Ok(model) => model,
        Err(e) => {
            log::error!("Model load failed: {}", e);
            eprintln!("Error: could not load the model: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdin = stdin();
    let mut reader = stdin.lock();
    let mut writer = stdout();

    if let Err(e) = run(model, &mut reader, &mut writer) {
        log::error!("Session ended with error: {}", e);
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run<R, W>(model: AttritionModel, reader: &mut R, writer: &mut W) -> std::io::Result<()>
where
    R: std::io::BufRead,
    W: Write,
{
    writeln!(writer, "=== {} ===", constants::APP_NAME)?;
    ui::render::render_model_info(writer, model.info())?;

    let adapter = InferenceAdapter::new(model);

    loop {
        let record = ui::form::collect_record(reader, writer)?;

        match adapter.predict(&record) {
            Ok(outcome) => ui::render::render_outcome(writer, &outcome)?,
            Err(e) => {
                // Inference failures are not recoverable mid-session; the
                // model was validated at load, so surface and stop.
                return Err(std::io::Error::other(e.to_string()));
            }
        }

        if !ui::form::prompt_again(reader, writer)? {
            return Ok(());
        }
    }
}
