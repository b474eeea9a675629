use spielplan::Roster;

/// A small roster covering both day formats, a match in the past, an unparseable day, an absent
/// group and an empty referee.
pub static ROSTER_JSON: &str = r#"[
    {"Team 1": "Rot Stars", "Team 2": "Blau Weiss", "Liga": "Kreisliga", "Gruppe": "A", "Schiedsrichter": "Meyer", "Tag": "15.03.2099", "Startzeit": "10:00", "Feld": 1},
    {"Team 1": "Grün-Weiß", "Team 2": "Rot Stars", "Liga": "Kreisliga", "Gruppe": "A", "Schiedsrichter": "Schulz", "Tag": "2099-03-14", "Startzeit": "18:30"},
    {"Team 1": "Blau Weiss", "Team 2": "Grün-Weiß", "Liga": "Pokal", "Gruppe": null, "Schiedsrichter": "Rot Stars", "Tag": "15.03.2099", "Startzeit": "09:00"},
    {"Team 1": "Rot Stars", "Team 2": "Gelb", "Liga": "Pokal", "Schiedsrichter": "", "Tag": "01.01.2000", "Startzeit": "12:00"},
    {"Team 1": "Gelb", "Team 2": "Blau Weiss", "Liga": "Kreisliga", "Gruppe": "B", "Schiedsrichter": "Meyer", "Tag": "unbekannt", "Startzeit": "11:00"}
]"#;

pub fn fixture() -> Roster {
    Roster::from_json_str(ROSTER_JSON).unwrap()
}

/// Builds a roster from field lists, e.g. `roster![{team1: "A", team2: "B"}, {referee: "C"}]`
macro_rules! roster {
    ($({ $($field:ident : $value:expr),* $(,)? }),* $(,)?) => {
        ::spielplan::Roster::new(vec![$(
            ::spielplan::Match {
                $($field: Some(String::from($value)),)*
                ..Default::default()
            }
        ),*])
    };
}

#[cfg(feature = "cli")]
pub struct Output {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[cfg(feature = "cli")]
/// Runs the `spq` binary on `input`, with the default options variable cleared
pub fn spq(args: &[&str], input: &str) -> Output {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let mut child = Command::new(env!("CARGO_BIN_EXE_spq"))
        .args(args)
        .env("SPIELPLAN_DEFAULT_OPTIONS", "")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();
    let output = child.wait_with_output().unwrap();
    Output {
        code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8(output.stdout).unwrap(),
        stderr: String::from_utf8(output.stderr).unwrap(),
    }
}
