//! Text and reactions shown in Discord for game outcomes.

use poise::serenity_prelude::{Mentionable, RoleId, UserId};

use super::{Ended, GuessOutcome};

pub const WRONG: &str = "❌";
pub const ELIMINATED: &str = "☠️";
pub const GROUP: &str = "✅";

const KEYCAPS: [&str; 11] = [
    "0️⃣", "1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣", "9️⃣", "🔟",
];

/// Keycap emoji for a remaining-tries count, if there is one.
pub fn keycap(remaining: u32) -> Option<&'static str> {
    KEYCAPS.get(usize::try_from(remaining).ok()?).copied()
}

/// The private confirmation sent back to whoever started the game.
pub fn started(limit: u32) -> String {
    format!("✅ game started with {limit} tries.")
}

/// The public message posted when a game starts.
pub fn announcement(
    starter: UserId,
    limit: u32,
    prefix: &str,
    has_group: bool,
    ping: Option<RoleId>,
) -> String {
    let mut text = format!(
        "{starter} started a 🎮 Guess-the-Idol 🎮 game!\nuse `/guess` or type `{prefix}idolname` to guess. you have **{limit}** tries.",
        starter = starter.mention(),
    );

    if has_group {
        text.push_str("\na group name has been provided!");
    }

    if let Some(role) = ping {
        text.push(' ');
        text.push_str(&role.mention().to_string());
    }

    text
}

/// The public reply to a `/guess`.
pub fn guess_reply(user: UserId, guess: &str, outcome: &GuessOutcome) -> String {
    let mention = user.mention();

    match outcome {
        GuessOutcome::Won { answer, image } => won(user, answer, image.as_deref()),
        GuessOutcome::GroupMatched => {
            format!("{GROUP} {mention} guessed **{guess}**, that's the right group!")
        }
        GuessOutcome::Wrong {
            attempts,
            limit,
            eliminated,
        } => {
            let mut text = format!(
                "{WRONG} {mention} guessed **{guess}**, but that's not correct! ({attempts} / {limit})"
            );

            if *eliminated {
                text.push_str(&format!("\n🚫 {mention} has been eliminated!"));
            }

            text
        }
    }
}

/// The public message for a winning guess.
pub fn won(user: UserId, answer: &str, image: Option<&str>) -> String {
    let mut text = format!(
        "🎉 {user} guessed right! the idol was **{answer}**. game over!",
        user = user.mention()
    );

    if let Some(image) = image {
        text.push_str(&format!("\n**image reveal:**\n{image}"));
    }

    text
}

/// The public message for `/end`.
pub fn ended(ended: &Ended) -> String {
    let mut text = format!("🛑 game ended. the idol was **{}**.", ended.answer);

    if let Some(starter) = ended.starter {
        text.push_str(&format!(" thanks to {} for hosting!", starter.mention()));
    }

    match &ended.image {
        Some(image) => text.push_str(&format!("\nhere is the idol image!\n{image}")),
        None => text.push_str("\nno image was provided for this round."),
    }

    text
}

/// Reactions for a prefix guess. A win is announced with a message instead.
pub fn reactions(outcome: &GuessOutcome) -> Vec<&'static str> {
    match outcome {
        GuessOutcome::Won { .. } => Vec::new(),
        GuessOutcome::GroupMatched => vec![GROUP],
        GuessOutcome::Wrong { eliminated, .. } => {
            let mut reactions = vec![WRONG];
            reactions.extend(outcome.remaining().and_then(keycap));

            if *eliminated {
                reactions.push(ELIMINATED);
            }

            reactions
        }
    }
}
