use crate::books::dto::FormField;

pub const HELP: &str = "\
commands:
  list                  reload every book
  search [text]         search titles and authors; no text reloads everything
  add                   fill in the add form field by field and submit it
  form                  open the add form
  set <field> <value>   edit a form field (title, author, description, year, isbn)
  submit                submit the add form
  cancel                close the add form, discarding it
  delete <id>           delete a book after confirmation
  state                 print the raw catalog state as JSON
  help                  show this help
  quit                  leave";

// Action is one line of user input in the terminal front end
#[derive(Debug, PartialEq, Clone)]
pub enum Action {
    List,
    Search(String),
    Add,
    OpenForm,
    Set(FormField, String),
    Submit,
    Cancel,
    Delete(String),
    State,
    Help,
    Quit,
    Invalid(String),
}

impl Action {
    pub fn parse(line: &str) -> Option<Action> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        let action = match command.to_lowercase().as_str() {
            "list" | "reload" => Action::List,
            "search" => Action::Search(rest.to_string()),
            "add" => Action::Add,
            "form" => Action::OpenForm,
            "set" => parse_set(rest),
            "submit" => Action::Submit,
            "cancel" => Action::Cancel,
            "delete" | "rm" => {
                if rest.is_empty() {
                    Action::Invalid("delete needs a book id".to_string())
                } else {
                    Action::Delete(rest.to_string())
                }
            }
            "state" => Action::State,
            "help" | "?" => Action::Help,
            "quit" | "exit" => Action::Quit,
            other => Action::Invalid(format!("unknown command {:?}, try help", other)),
        };
        Some(action)
    }
}

fn parse_set(rest: &str) -> Action {
    let (name, value) = match rest.split_once(char::is_whitespace) {
        Some((name, value)) => (name, value.trim()),
        None => (rest, ""),
    };
    match FormField::parse(name) {
        Some(field) => Action::Set(field, value.to_string()),
        None => Action::Invalid(format!("unknown form field {:?}", name)),
    }
}

// y/yes answers confirm, anything else declines
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
