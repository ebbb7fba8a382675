//! Static team catalog
//!
//! Maps a sport key to its ordered list of teams. Abbreviations are declared
//! data taken from the site's own team URLs; they are never derived from the
//! slug, because prefixes collide ("new-york-knicks" and "new-orleans-pelicans"
//! both start with "new").

use crate::config::TeamEntry;
use crate::CatalogError;
use std::collections::BTreeMap;
use std::fmt;

/// Identifies one team to crawl
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CrawlTarget {
    /// Sport key as used in site paths (e.g. "nba")
    pub sport: String,
    /// Team slug as used in site paths (e.g. "boston-celtics")
    pub slug: String,
    /// Team abbreviation as used in site paths (e.g. "bos")
    pub abbrev: String,
}

impl CrawlTarget {
    pub fn new(sport: &str, slug: &str, abbrev: &str) -> Self {
        Self {
            sport: sport.to_lowercase(),
            slug: slug.to_lowercase(),
            abbrev: abbrev.to_lowercase(),
        }
    }

    /// Human-readable team name, e.g. "boston celtics"
    pub fn display_name(&self) -> String {
        slug_to_name(&self.slug)
    }
}

impl fmt::Display for CrawlTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({})", self.sport, self.slug, self.abbrev)
    }
}

/// One catalog row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamInfo {
    pub slug: String,
    pub abbrev: String,
}

/// Sport key -> ordered teams
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sports: BTreeMap<String, Vec<TeamInfo>>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog of the four major North American leagues
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (sport, teams) in [
            ("nba", NBA_TEAMS),
            ("nfl", NFL_TEAMS),
            ("mlb", MLB_TEAMS),
            ("nhl", NHL_TEAMS),
        ] {
            for (slug, abbrev) in teams {
                catalog.insert(sport, slug, abbrev);
            }
        }
        catalog
    }

    /// Built-in catalog extended with config-supplied teams
    pub fn with_entries(entries: &[TeamEntry]) -> Self {
        let mut catalog = Self::builtin();
        catalog.extend(entries);
        catalog
    }

    /// Adds a team, replacing the abbreviation if the slug already exists
    pub fn insert(&mut self, sport: &str, slug: &str, abbrev: &str) {
        let teams = self.sports.entry(sport.to_lowercase()).or_default();
        let slug = slug.to_lowercase();
        let abbrev = abbrev.to_lowercase();

        match teams.iter_mut().find(|t| t.slug == slug) {
            Some(existing) => existing.abbrev = abbrev,
            None => teams.push(TeamInfo { slug, abbrev }),
        }
    }

    pub fn extend(&mut self, entries: &[TeamEntry]) {
        for entry in entries {
            self.insert(&entry.sport, &entry.slug, &entry.abbrev);
        }
    }

    pub fn has_sport(&self, sport: &str) -> bool {
        self.sports.contains_key(&sport.to_lowercase())
    }

    /// Sport keys in sorted order
    pub fn sports(&self) -> impl Iterator<Item = &str> {
        self.sports.keys().map(String::as_str)
    }

    /// Teams of a sport in catalog order
    pub fn teams(&self, sport: &str) -> Result<&[TeamInfo], CatalogError> {
        self.sports
            .get(&sport.to_lowercase())
            .map(Vec::as_slice)
            .ok_or_else(|| CatalogError::UnknownSport(sport.to_string()))
    }

    /// Resolves a requested sport/team pair into a crawl target
    pub fn target(&self, sport: &str, slug: &str) -> Result<CrawlTarget, CatalogError> {
        let teams = self.teams(sport)?;
        let slug_lc = slug.to_lowercase();

        teams
            .iter()
            .find(|t| t.slug == slug_lc)
            .map(|t| CrawlTarget::new(sport, &t.slug, &t.abbrev))
            .ok_or_else(|| CatalogError::UnknownTeam {
                sport: sport.to_string(),
                team: slug.to_string(),
            })
    }

    /// Every team of a sport as a crawl target
    pub fn targets(&self, sport: &str) -> Result<Vec<CrawlTarget>, CatalogError> {
        Ok(self
            .teams(sport)?
            .iter()
            .map(|t| CrawlTarget::new(sport, &t.slug, &t.abbrev))
            .collect())
    }

    /// Lowercase display names of every team in a sport
    ///
    /// Used to reject roster rows that are really team names leaking in from
    /// a standings table.
    pub fn team_names(&self, sport: &str) -> Vec<String> {
        self.teams(sport)
            .map(|teams| teams.iter().map(|t| slug_to_name(&t.slug)).collect())
            .unwrap_or_default()
    }
}

fn slug_to_name(slug: &str) -> String {
    slug.replace('-', " ")
}

const NBA_TEAMS: &[(&str, &str)] = &[
    ("atlanta-hawks", "atl"),
    ("boston-celtics", "bos"),
    ("brooklyn-nets", "bkn"),
    ("charlotte-hornets", "cha"),
    ("chicago-bulls", "chi"),
    ("cleveland-cavaliers", "cle"),
    ("dallas-mavericks", "dal"),
    ("denver-nuggets", "den"),
    ("detroit-pistons", "det"),
    ("golden-state-warriors", "gs"),
    ("houston-rockets", "hou"),
    ("indiana-pacers", "ind"),
    ("los-angeles-clippers", "lac"),
    ("los-angeles-lakers", "lal"),
    ("memphis-grizzlies", "mem"),
    ("miami-heat", "mia"),
    ("milwaukee-bucks", "mil"),
    ("minnesota-timberwolves", "min"),
    ("new-orleans-pelicans", "no"),
    ("new-york-knicks", "ny"),
    ("oklahoma-city-thunder", "okc"),
    ("orlando-magic", "orl"),
    ("philadelphia-76ers", "phi"),
    ("phoenix-suns", "phx"),
    ("portland-trail-blazers", "por"),
    ("sacramento-kings", "sac"),
    ("san-antonio-spurs", "sa"),
    ("toronto-raptors", "tor"),
    ("utah-jazz", "utah"),
    ("washington-wizards", "wsh"),
];

const NFL_TEAMS: &[(&str, &str)] = &[
    ("arizona-cardinals", "ari"),
    ("atlanta-falcons", "atl"),
    ("baltimore-ravens", "bal"),
    ("buffalo-bills", "buf"),
    ("carolina-panthers", "car"),
    ("chicago-bears", "chi"),
    ("cincinnati-bengals", "cin"),
    ("cleveland-browns", "cle"),
    ("dallas-cowboys", "dal"),
    ("denver-broncos", "den"),
    ("detroit-lions", "det"),
    ("green-bay-packers", "gb"),
    ("houston-texans", "hou"),
    ("indianapolis-colts", "ind"),
    ("jacksonville-jaguars", "jax"),
    ("kansas-city-chiefs", "kc"),
    ("las-vegas-raiders", "lv"),
    ("los-angeles-chargers", "lac"),
    ("los-angeles-rams", "lar"),
    ("miami-dolphins", "mia"),
    ("minnesota-vikings", "min"),
    ("new-england-patriots", "ne"),
    ("new-orleans-saints", "no"),
    ("new-york-giants", "nyg"),
    ("new-york-jets", "nyj"),
    ("philadelphia-eagles", "phi"),
    ("pittsburgh-steelers", "pit"),
    ("san-francisco-49ers", "sf"),
    ("seattle-seahawks", "sea"),
    ("tampa-bay-buccaneers", "tb"),
    ("tennessee-titans", "ten"),
    ("washington-commanders", "wsh"),
];

const MLB_TEAMS: &[(&str, &str)] = &[
    ("arizona-diamondbacks", "ari"),
    ("atlanta-braves", "atl"),
    ("baltimore-orioles", "bal"),
    ("boston-red-sox", "bos"),
    ("chicago-cubs", "chc"),
    ("chicago-white-sox", "chw"),
    ("cincinnati-reds", "cin"),
    ("cleveland-guardians", "cle"),
    ("colorado-rockies", "col"),
    ("detroit-tigers", "det"),
    ("houston-astros", "hou"),
    ("kansas-city-royals", "kc"),
    ("los-angeles-angels", "laa"),
    ("los-angeles-dodgers", "lad"),
    ("miami-marlins", "mia"),
    ("milwaukee-brewers", "mil"),
    ("minnesota-twins", "min"),
    ("new-york-mets", "nym"),
    ("new-york-yankees", "nyy"),
    ("oakland-athletics", "oak"),
    ("philadelphia-phillies", "phi"),
    ("pittsburgh-pirates", "pit"),
    ("san-diego-padres", "sd"),
    ("san-francisco-giants", "sf"),
    ("seattle-mariners", "sea"),
    ("st-louis-cardinals", "stl"),
    ("tampa-bay-rays", "tb"),
    ("texas-rangers", "tex"),
    ("toronto-blue-jays", "tor"),
    ("washington-nationals", "wsh"),
];

const NHL_TEAMS: &[(&str, &str)] = &[
    ("anaheim-ducks", "ana"),
    ("arizona-coyotes", "ari"),
    ("boston-bruins", "bos"),
    ("buffalo-sabres", "buf"),
    ("calgary-flames", "cgy"),
    ("carolina-hurricanes", "car"),
    ("chicago-blackhawks", "chi"),
    ("colorado-avalanche", "col"),
    ("columbus-blue-jackets", "cbj"),
    ("dallas-stars", "dal"),
    ("detroit-red-wings", "det"),
    ("edmonton-oilers", "edm"),
    ("florida-panthers", "fla"),
    ("los-angeles-kings", "la"),
    ("minnesota-wild", "min"),
    ("montreal-canadiens", "mtl"),
    ("nashville-predators", "nsh"),
    ("new-jersey-devils", "nj"),
    ("new-york-islanders", "nyi"),
    ("new-york-rangers", "nyr"),
    ("ottawa-senators", "ott"),
    ("philadelphia-flyers", "phi"),
    ("pittsburgh-penguins", "pit"),
    ("san-jose-sharks", "sj"),
    ("seattle-kraken", "sea"),
    ("st-louis-blues", "stl"),
    ("tampa-bay-lightning", "tb"),
    ("toronto-maple-leafs", "tor"),
    ("vancouver-canucks", "van"),
    ("vegas-golden-knights", "vgk"),
    ("washington-capitals", "wsh"),
    ("winnipeg-jets", "wpg"),
];
