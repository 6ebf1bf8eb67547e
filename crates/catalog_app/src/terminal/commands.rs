use catalog_core::{ItemId, Msg};

/// One line of user input, or one engine completion routed through the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Browse(Msg),
    Save(ItemId),
    ShowSaved,
    ShowGenres,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (trimmed.trim_end(), ""),
    };

    match keyword.to_ascii_lowercase().as_str() {
        "" => Command::Browse(Msg::NoOp),
        "search" | "s" => Command::Browse(Msg::SearchTextChanged(rest.to_string())),
        "genre" | "g" => {
            let genre = (!rest.is_empty()).then(|| rest.to_string());
            Command::Browse(Msg::GenreSelected(genre))
        }
        "clear" => Command::Browse(Msg::FiltersCleared),
        "more" | "m" => Command::Browse(Msg::MoreRequested),
        "retry" | "r" => Command::Browse(Msg::RetryRequested),
        "save" => match rest.parse::<ItemId>() {
            Ok(id) => Command::Save(id),
            Err(_) => Command::Unknown(line.to_string()),
        },
        "saved" => Command::ShowSaved,
        "genres" => Command::ShowGenres,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

pub const HELP: &[&str] = &[
    "Commands:",
    "  search <text>   search titles and authors (empty clears the search)",
    "  genre <name>    show one genre; `genre` alone shows all genres",
    "  clear           clear search and genre",
    "  more            load the next page",
    "  retry           retry the failed page",
    "  genres          list genres among loaded books",
    "  save <id>       save a loaded book for offline reading",
    "  saved           list saved books",
    "  help            show this help",
    "  quit            exit",
];
