include!("../../lib.rs");
use std::io;
use std::io::Write;
use tracing::info;
use crate::books::dto::FormField;
use crate::books::factory::create_book_repository;
use crate::catalog::action::{Action, HELP, is_affirmative};
use crate::catalog::controller::CatalogController;
use crate::catalog::factory::{build_catalog_controller, check_backend};
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::logs::setup_tracing;

// Configuration comes from the environment (and `.env`), e.g.
// BOOK_LIBRARY_API_URL=http://localhost:5000/api or BOOK_LIBRARY_STORE=memory.

#[tokio::main]
async fn main() -> Result<(), LibraryError> {
    let config = Configuration::from_env();
    setup_tracing(&config);
    let state = AppState::new(config);

    let book_repo = create_book_repository(&state.config)?;
    let _ = check_backend(book_repo.as_ref()).await;
    let ctrl = build_catalog_controller(&state, book_repo);

    ctrl.load_books().await;
    print_view(&ctrl)?;
    println!("type help for commands");

    loop {
        let Some(line) = ask("> ")? else {
            break;
        };
        let Some(action) = Action::parse(line.as_str()) else {
            continue;
        };
        match action {
            Action::Quit => break,
            Action::Help => {
                println!("{}", HELP);
                continue;
            }
            Action::State => {
                println!("{}", serde_json::to_string_pretty(&ctrl.snapshot())?);
                continue;
            }
            Action::Invalid(message) => {
                println!("{}", message);
                continue;
            }
            other => run(&ctrl, other).await?,
        }
        print_view(&ctrl)?;
    }
    info!("bye");
    Ok(())
}

async fn run(ctrl: &CatalogController, action: Action) -> LibraryResult<()> {
    match action {
        Action::List => ctrl.load_books().await,
        Action::Search(query) => {
            ctrl.set_search_query(query.as_str());
            ctrl.search().await;
        }
        Action::Add => {
            // a form left open by a failed submit keeps its values
            if !ctrl.snapshot().show_add_form {
                ctrl.set_add_form_visible(true);
            }
            for field in FormField::ALL {
                let current = ctrl.snapshot().add_form.get(field).to_string();
                match ask(format!("{} [{}]: ", field, current).as_str())? {
                    Some(value) if !value.trim().is_empty() => ctrl.update_form_field(field, value.trim()),
                    Some(_) => {}
                    None => return Ok(()),
                }
            }
            let _ = ctrl.submit_add_form().await;
        }
        Action::OpenForm => ctrl.set_add_form_visible(true),
        Action::Set(field, value) => {
            if !ctrl.snapshot().show_add_form {
                ctrl.set_add_form_visible(true);
            }
            ctrl.update_form_field(field, value.as_str());
        }
        Action::Submit => {
            let _ = ctrl.submit_add_form().await;
        }
        Action::Cancel => ctrl.set_add_form_visible(false),
        Action::Delete(id) => {
            let confirm = |prompt: &str| {
                matches!(ask(format!("{} [y/N] ", prompt).as_str()), Ok(Some(answer)) if is_affirmative(answer.as_str()))
            };
            let _ = ctrl.delete_book(id.as_str(), &confirm).await;
        }
        Action::Quit | Action::Help | Action::State | Action::Invalid(_) => {}
    }
    Ok(())
}

fn print_view(ctrl: &CatalogController) -> LibraryResult<()> {
    let mut out = io::stdout().lock();
    writeln!(out)?;
    write!(out, "{}", ctrl.render())?;
    out.flush()?;
    Ok(())
}

// prints a prompt and reads one line; None at end of input
fn ask(prompt: &str) -> LibraryResult<Option<String>> {
    let mut out = io::stdout().lock();
    write!(out, "{}", prompt)?;
    out.flush()?;
    drop(out);
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
