//! Inline HTML fixtures shared by the integration tests

#![allow(dead_code)]

const PLAYERS: &[(&str, &str, &str)] = &[
    ("Jalen Green", "4", "SG"),
    ("Alperen Sengun", "28", "C"),
    ("Fred VanVleet", "5", "PG"),
    ("Dillon Brooks", "9", "SF"),
    ("Jabari Smith Jr.", "10", "PF"),
    ("Amen Thompson", "1", "G"),
    ("Tari Eason", "17", "F"),
    ("Cam Whitmore", "7", "F"),
    ("Steven Adams", "12", "C"),
    ("Jeff Green", "32", "F"),
    ("Aaron Holiday", "0", "G"),
    ("Reed Sheppard", "15", "G"),
    ("Jock Landale", "2", "C"),
    ("Jae'Sean Tate", "8", "F"),
    ("Nate Williams", "19", "G"),
    ("Jack McVeigh", "24", "F"),
    ("Nate Hinton", "14", "G"),
    ("Markieff Morris", "88", "F"),
];

/// A roster page in the site's layout with `count` players (at most 18)
pub fn roster_page(count: usize) -> String {
    let rows: String = PLAYERS
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, (name, number, position))| {
            format!(
                r#"<tr>
                    <td><img src="/i/headshots/{i}.png"></td>
                    <td><a href="/nba/player/_/id/{id}/{slug}">{name}</a><span class="pl2 n10">{number}</span></td>
                    <td>{position}</td>
                    <td>{age}</td>
                    <td>6' {inches}"</td>
                    <td>{weight} lbs</td>
                    <td>State University</td>
                </tr>"#,
                id = 4_000_000 + i,
                slug = name.to_lowercase().replace(' ', "-"),
                age = 20 + i,
                inches = i % 12,
                weight = 190 + i,
            )
        })
        .collect();

    format!(
        r#"<html><head><title>Houston Rockets Roster</title></head><body>
        <table class="standings-mini">
            <tr><th>Team</th><th>W</th><th>L</th></tr>
            <tr><td>Houston Rockets</td><td>52</td><td>30</td></tr>
        </table>
        <table class="Table">
            <thead><tr><th>Name</th><th>#</th><th>Pos</th><th>Age</th><th>Height</th><th>Weight</th><th>College</th></tr></thead>
            <tbody>{rows}</tbody>
        </table>
        </body></html>"#
    )
}

/// A page whose only table is a standings table
pub fn standings_page() -> String {
    let teams = [
        ("Oklahoma City Thunder", 68, 14),
        ("Houston Rockets", 52, 30),
        ("Los Angeles Lakers", 50, 32),
        ("Denver Nuggets", 50, 32),
        ("LA Clippers", 50, 32),
        ("Minnesota Timberwolves", 49, 33),
        ("Golden State Warriors", 48, 34),
        ("Memphis Grizzlies", 48, 34),
        ("Sacramento Kings", 40, 42),
        ("Dallas Mavericks", 39, 43),
        ("Phoenix Suns", 36, 46),
        ("Portland Trail Blazers", 36, 46),
    ];
    let rows: String = teams
        .iter()
        .map(|(team, w, l)| {
            format!(
                "<tr><td>{team}</td><td>{w}</td><td>{l}</td><td>.{pct:03}</td><td>-</td></tr>",
                pct = w * 1000 / (w + l)
            )
        })
        .collect();

    format!(
        r#"<html><body><table>
            <tr><th>Team</th><th>W</th><th>L</th><th>PCT</th><th>GB</th></tr>
            {rows}
        </table></body></html>"#
    )
}

/// A schedule page: a `table.Table` with four-cell game rows
pub fn schedule_page(games: usize) -> String {
    let rows: String = (1..=games)
        .map(|d| {
            let opponent = if d % 2 == 0 { "@ Dallas" } else { "vs Memphis" };
            format!("<tr><td>Nov {d}</td><td>{opponent}</td><td>W 110-10{d}</td><td>Hi: 30</td></tr>")
        })
        .collect();

    format!(
        r#"<html><body><table class="Table">
            <tr><th>DATE</th><th>OPPONENT</th><th>RESULT</th><th>HIGH POINTS</th></tr>
            {rows}
        </table></body></html>"#
    )
}

/// A news page with `count` article teasers
pub fn news_page(count: usize) -> String {
    let articles: String = (1..=count)
        .map(|i| {
            format!(
                r#"<article><h2>Rockets storyline number {i}</h2><a href="/nba/story/_/id/{i}">Read</a></article>"#
            )
        })
        .collect();
    format!("<html><body>{articles}</body></html>")
}

/// Wraps anchors for the given hrefs in a minimal page
pub fn link_page(hrefs: &[&str]) -> String {
    let anchors: String = hrefs
        .iter()
        .map(|href| format!(r#"<a href="{href}">link</a>"#))
        .collect();
    format!("<html><body><nav>{anchors}</nav></body></html>")
}
