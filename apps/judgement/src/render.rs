//! Plain-text rendering of a game snapshot.

use std::fmt::Write;

use judgement::domain::snapshot::{
    BiddingSnapshot, GameEndSnapshot, PlayingSnapshot, RoundEndSnapshot, SetupSnapshot,
    TrumpSelectionSnapshot,
};
use judgement::domain::standings::Standing;
use judgement::{GameSnapshot, PhaseSnapshot};

pub fn render(snap: &GameSnapshot) -> String {
    let mut out = String::new();
    if !snap.game.players.is_empty() {
        header(&mut out, snap);
    }
    match &snap.phase {
        PhaseSnapshot::Setup(s) => setup(&mut out, s),
        PhaseSnapshot::TrumpSelection(s) => trump_selection(&mut out, s),
        PhaseSnapshot::Bidding(s) => bidding(&mut out, snap, s),
        PhaseSnapshot::Playing(s) => playing(&mut out, snap, s),
        PhaseSnapshot::RoundEnd(s) => round_end(&mut out, s),
        PhaseSnapshot::GameEnd(s) => game_end(&mut out, s),
    }
    out
}

fn name_of(snap: &GameSnapshot, seat: u8) -> &str {
    snap.game
        .players
        .get(seat as usize)
        .map(|p| p.name.as_str())
        .unwrap_or("?")
}

fn slot(v: Option<u8>) -> String {
    v.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn header(out: &mut String, snap: &GameSnapshot) {
    let g = &snap.game;
    let _ = writeln!(
        out,
        "Round {} of {} | {} cards | Trump: {}",
        g.round_no, g.total_rounds, g.cards_this_round, g.trump
    );
    for p in &g.players {
        let mut tags = Vec::new();
        if p.is_dealer {
            tags.push("dealer");
        }
        if p.is_first_bidder {
            tags.push("bids first");
        }
        let tags = if tags.is_empty() {
            String::new()
        } else {
            format!(" ({})", tags.join(", "))
        };
        let _ = writeln!(out, "  [{}] {:<12} {:>4}{}", p.seat, p.name, p.total_score, tags);
    }
}

fn setup(out: &mut String, s: &SetupSnapshot) {
    let _ = writeln!(out, "Setup: {} players", s.num_players);
    let _ = writeln!(
        out,
        "  {} cards in the first round, {} rounds in total",
        s.max_cards, s.total_rounds
    );
    for (i, name) in s.player_names.iter().enumerate() {
        let shown = if name.is_empty() { "(unnamed)" } else { name.as_str() };
        let _ = writeln!(out, "  name {i}: {shown}");
    }
}

fn trump_selection(out: &mut String, s: &TrumpSelectionSnapshot) {
    let _ = writeln!(
        out,
        "Trump selection: {} (default this round: {})",
        s.selected, s.default_for_round
    );
}

fn bidding(out: &mut String, snap: &GameSnapshot, s: &BiddingSnapshot) {
    let _ = writeln!(
        out,
        "Bidding: total {} of {} cards",
        s.bids_total, snap.game.cards_this_round
    );
    for (i, bid) in s.bids.iter().enumerate() {
        let _ = writeln!(out, "  {:<12} {}", name_of(snap, i as u8), slot(*bid));
    }
    match s.to_act {
        Some(seat) => {
            let _ = write!(
                out,
                "  {} to bid ({}-{})",
                name_of(snap, seat),
                s.min_bid,
                s.max_bid
            );
            if let Some(f) = s.forbidden_bid {
                let _ = write!(out, ", cannot bid {f}");
            }
            let _ = writeln!(out);
        }
        None => {
            let _ = writeln!(out, "  All bids in; start the round or edit a bid");
        }
    }
}

fn playing(out: &mut String, snap: &GameSnapshot, s: &PlayingSnapshot) {
    let _ = writeln!(out, "Playing: enter hands won");
    for (i, (bid, won)) in s.bids.iter().zip(&s.hands_won).enumerate() {
        let _ = writeln!(
            out,
            "  {:<12} bid {:>2}  won {:>2}",
            name_of(snap, i as u8),
            slot(*bid),
            slot(*won)
        );
    }
}

fn standings_table(out: &mut String, rows: &[Standing]) {
    for s in rows {
        let _ = writeln!(out, "  {}. {:<12} {:>4}", s.rank, s.name, s.score);
    }
}

fn round_end(out: &mut String, s: &RoundEndSnapshot) {
    let _ = writeln!(out, "Round complete");
    for r in &s.results {
        let mark = if r.made { "made" } else { "missed" };
        let _ = writeln!(
            out,
            "  {:<12} bid {:>2} won {:>2}  {:<6} +{:<3} = {}",
            r.name,
            slot(r.bid),
            slot(r.won),
            mark,
            r.score,
            r.total
        );
    }
    let _ = writeln!(out, "Standings:");
    standings_table(out, &s.standings);
    if s.is_last_round {
        let _ = writeln!(out, "Last round played; next-round finishes the game");
    }
}

fn game_end(out: &mut String, s: &GameEndSnapshot) {
    match &s.winner {
        Some(w) => {
            let _ = writeln!(out, "Game over: {} wins with {} points", w.name, w.score);
        }
        None => {
            let _ = writeln!(out, "Game over");
        }
    }
    standings_table(out, &s.standings);
}
