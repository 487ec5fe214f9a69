use tetris_stack::prelude::*;

/// Starts a reproducible game with a full queue of ids 0 to 4.
pub fn new_game(seed: u64) -> Game
{
    let game = Game::new(Generator::seeded(seed));
    assert!(game.is_ok(), "\tdue to {}", game.unwrap_err());
    game.unwrap()
}

/// The ids in the queue, front to back.
pub fn queue_ids(game: &Game) -> Vec<u32>
{
    game.queue().iter().map(Piece::id).collect()
}

/// The ids in the reserve, top down.
pub fn reserve_ids(game: &Game) -> Vec<u32>
{
    game.reserve().iter().map(Piece::id).collect()
}

/// Asserts that an action failed with the expected kind and touched nothing.
pub fn assert_rejected(game: &mut Game, action: fn(&mut Game) -> Result<Outcome>, kind: Kind)
{
    let (queue, reserve, next_id) = (queue_ids(game), reserve_ids(game), game.generator().next_id());

    let result = action(game);
    assert!(result.is_err(), "expected {:?}, got {:?}", kind, result);
    assert_eq!(result.unwrap_err().kind, kind);

    assert_eq!(queue_ids(game), queue);
    assert_eq!(reserve_ids(game), reserve);
    assert_eq!(game.generator().next_id(), next_id);
}

/// Feeds a script to a seeded menu and returns everything it printed.
pub fn run_menu(seed: u64, script: &str) -> (Menu, String)
{
    let options = MenuOptions {
        seed: Some(seed),
        ..Default::default()
    };
    let mut menu = Menu::new(&options).unwrap();

    let mut output: Vec<u8> = Vec::new();
    let result = menu.run(script.as_bytes(), &mut output);
    assert!(result.is_ok(), "\tdue to {}", result.unwrap_err());

    (menu, String::from_utf8(output).unwrap())
}
