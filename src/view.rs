//! Plain-text renderings of a game snapshot for the terminal front end.
//! Everything here is a pure function of the snapshot(s) it is given.

use common::{
    card, cards, landmark, landmarks, CardDef, Change, GameSnapshot, Player, PlayerNum, Roll,
    Step, Stock,
};
use std::fmt::Write;

const DIE_FACES: [char; 6] = ['⚀', '⚁', '⚂', '⚃', '⚄', '⚅'];

// One line of the bank's inventory table
pub fn inventory_row(def: &CardDef, bank_count: u32) -> String {
    format!(
        "{:>2}  {:<5}  {:<26}  {:>2}c  {:>2} left  [{}] {}",
        def.index().to_string(),
        def.roll().to_string(),
        def.name(),
        def.cost(),
        bank_count,
        def.category(),
        def.effect()
    )
}

pub fn inventory(bank: &Stock) -> String {
    let mut out = String::from(" #  roll   card                        cost  stock\n");
    for def in cards() {
        out.push_str(&inventory_row(def, bank.count(def.index())));
        out.push('\n');
    }
    out
}

// A player's coins, landmarks and establishments. When the previous state of
// the same player is given, changed values are marked.
pub fn player_panel(
    num: PlayerNum,
    player: &Player,
    previous: Option<&Player>,
    is_current: bool,
) -> String {
    let mut out = String::new();
    let marker = if is_current { " <- current" } else { "" };
    let _ = write!(out, "Player {}{}  coins: {}", num, marker, player.coins);
    if let Some(prev) = previous {
        if prev.coins != player.coins {
            let delta = i64::from(player.coins) - i64::from(prev.coins);
            let _ = write!(out, " ({:+})", delta);
        }
    }
    out.push('\n');

    let built: Vec<String> = landmarks()
        .iter()
        .map(|def| {
            let mark = if player.has_landmark(def.id()) { "x" } else { " " };
            format!("[{}] {}", mark, def.name())
        })
        .collect();
    let _ = writeln!(out, "  landmarks: {}", built.join("  "));

    let owned: Vec<String> = player
        .stock
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(idx, count)| {
            let changed = previous.map_or(false, |prev| prev.stock.count(idx) != count);
            format!(
                "{} x{}{}",
                card(idx).name(),
                count,
                if changed { "*" } else { "" }
            )
        })
        .collect();
    if owned.is_empty() {
        out.push_str("  cards: none\n");
    } else {
        let _ = writeln!(out, "  cards: {}", owned.join(", "));
    }
    out
}

pub fn dice(roll: &Roll) -> String {
    let face = |d: u8| {
        DIE_FACES
            .get(usize::from(d).wrapping_sub(1))
            .copied()
            .unwrap_or('?')
    };
    match (roll.die_one, roll.die_two) {
        (None, None) => "no dice rolled yet".to_string(),
        (Some(a), None) | (None, Some(a)) => format!("{} {}  total {}", face(a), a, a),
        (Some(a), Some(b)) => {
            let doubles = if roll.is_doubles() { "  doubles!" } else { "" };
            format!(
                "{} {}  {} {}  total {}{}",
                face(a),
                a,
                face(b),
                b,
                u16::from(a) + u16::from(b),
                doubles
            )
        }
    }
}

fn step_hint(step: Step) -> &'static str {
    match step {
        Step::Setup => "waiting for the game to be set up",
        Step::Roll => "roll one die (roll) or two dice (roll2)",
        Step::Confirm => "keep the roll (confirm) or roll again",
        Step::Steal => "choose a player to steal from (steal <n>)",
        Step::Buy => "buy a card or landmark, or end the turn (end)",
        Step::Won => "the game is over",
        Step::Unknown => "unrecognised step",
    }
}

// The whole table: turn header, dice, every player, and the bank
pub fn board(snapshot: &GameSnapshot, previous: Option<&GameSnapshot>) -> String {
    let mut out = String::new();
    if let Some(code) = snapshot.code() {
        let _ = writeln!(out, "Game {}", code);
    }
    let _ = writeln!(
        out,
        "Player {}'s turn, step: {} ({})",
        snapshot.current_player_num(),
        snapshot.step(),
        step_hint(snapshot.step())
    );
    let _ = writeln!(out, "Dice: {}", dice(&snapshot.recent_roll()));
    if let Some(winner) = snapshot.winner() {
        let _ = writeln!(out, "Player {} has built every landmark and wins!", winner);
    }
    out.push('\n');
    for (num, player) in snapshot.players() {
        let prev = previous.map(|p| p.player(num));
        out.push_str(&player_panel(
            num,
            player,
            prev,
            num == snapshot.current_player_num(),
        ));
    }
    out.push('\n');
    out.push_str(&inventory(snapshot.stock()));
    out
}

pub fn change(change: &Change) -> String {
    match change {
        Change::Turn { from, to } => format!("turn passed from player {} to player {}", from, to),
        Change::Step { from, to } => format!("step {} -> {}", from, to),
        Change::Coins { player, from, to } => {
            format!("player {} coins {} -> {}", player, from, to)
        }
        Change::Cards {
            player,
            card: idx,
            from,
            to,
        } => format!("player {} {} {} -> {}", player, card(*idx).name(), from, to),
        Change::Landmark {
            player,
            landmark: id,
        } => format!("player {} built the {}", player, landmark(*id).name()),
        Change::Bank {
            card: idx,
            from,
            to,
        } => format!("bank {} {} -> {}", card(*idx).name(), from, to),
    }
}
