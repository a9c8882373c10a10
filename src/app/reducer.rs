use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    let handlers: [fn(&mut AppState, &Action) -> UpdateResult; 3] = [
        features::system::update,
        features::home::update,
        features::palette::update,
    ];

    for handler in handlers {
        if let UpdateResult::Handled(command) = handler(state, &action) {
            return command;
        }
    }
    None
}
