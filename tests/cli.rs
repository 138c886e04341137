use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn vitrine(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("vitrine").unwrap();
    cmd.env("VITRINE_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// A data directory with the login delay switched off.
fn home() -> tempfile::TempDir {
    let temp_dir = tempfile::tempdir().unwrap();
    vitrine(temp_dir.path())
        .args(["config", "login-delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("login-delay-ms set to 0"));
    temp_dir
}

fn login(home: &Path) {
    vitrine(home)
        .args(["login", "admin@example.com", "secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as admin@example.com (admin)"));
}

#[test]
fn test_login_add_list_logout_round_trip() {
    let temp_dir = home();
    login(temp_dir.path());

    vitrine(temp_dir.path())
        .args([
            "portfolio",
            "add",
            "--title",
            "Loja Nova",
            "--category",
            "E-commerce",
            "--image-url",
            "https://example.com/loja.png",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Portfolio item added"));
    assert!(temp_dir.path().join("portfolioData.json").exists());

    vitrine(temp_dir.path())
        .args(["portfolio", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loja Nova"))
        .stdout(predicate::str::contains("E-commerce"));

    vitrine(temp_dir.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out admin@example.com"));
    assert!(!temp_dir.path().join("user.json").exists());

    vitrine(temp_dir.path())
        .args([
            "portfolio",
            "add",
            "--title",
            "Outra",
            "--category",
            "Web",
            "--image-url",
            "https://example.com/x.png",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: You must be logged in to add portfolio items",
        ));

    vitrine(temp_dir.path())
        .args(["portfolio", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Outra").not());
}

#[test]
fn test_rejected_login() {
    let temp_dir = home();
    vitrine(temp_dir.path())
        .args(["login", "intruso@example.com", "secret"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Credenciais inválidas. Tente novamente."));

    vitrine(temp_dir.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
fn test_validation_errors_are_reported() {
    let temp_dir = home();
    login(temp_dir.path());

    vitrine(temp_dir.path())
        .args(["services", "add", "--title", "Nuvem", "--icon", "<img>"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("A descrição é obrigatória."))
        .stderr(predicate::str::contains("O ícone deve ser um código SVG válido."));
    assert!(!temp_dir.path().join("servicesData.json").exists());
}

#[test]
fn test_corrupt_collection_falls_back_to_seed() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("portfolioData.json");
    std::fs::write(&file, "{ not json").unwrap();

    vitrine(temp_dir.path())
        .args(["portfolio", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("E-commerce"));
    assert!(!file.exists());
}

#[test]
fn test_unknown_id_is_an_error() {
    let temp_dir = home();
    login(temp_dir.path());

    vitrine(temp_dir.path())
        .args(["team", "delete", "no-such-id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-id"));
}

#[test]
fn test_content_section_set_from_file() {
    let temp_dir = home();
    login(temp_dir.path());

    let payload = temp_dir.path().join("tech.json");
    std::fs::write(
        &payload,
        r#"{"title":"Nossas ferramentas","subtitle":"Escolhidas a dedo"}"#,
    )
    .unwrap();

    vitrine(temp_dir.path())
        .args(["content", "set", "techStack"])
        .arg(&payload)
        .assert()
        .success()
        .stdout(predicate::str::contains("Alterações salvas com sucesso!"));

    vitrine(temp_dir.path())
        .args(["content", "show", "tech-stack"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nossas ferramentas"));

    vitrine(temp_dir.path())
        .args(["content", "show", "footer"])
        .assert()
        .failure();
}

#[test]
fn test_settings_accent() {
    let temp_dir = home();
    login(temp_dir.path());

    vitrine(temp_dir.path())
        .args(["settings", "set", "--accent", "#ffffff", "--site-name", "Acme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme"))
        .stdout(predicate::str::contains("#ffffff (hsl 0 0% 100%)"));

    vitrine(temp_dir.path())
        .args(["settings", "set", "--accent", "azul"])
        .assert()
        .failure();

    vitrine(temp_dir.path())
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#ffffff"));
}

#[test]
fn test_data_dir_flag_overrides_env() {
    let env_dir = tempfile::tempdir().unwrap();
    let flag_dir = tempfile::tempdir().unwrap();

    vitrine(env_dir.path())
        .args(["config", "log-level", "info", "--data-dir"])
        .arg(flag_dir.path())
        .assert()
        .success();

    assert!(flag_dir.path().join("config.json").exists());
    assert!(!env_dir.path().join("config.json").exists());
}

#[test]
fn test_overview_counts_seed() {
    let temp_dir = tempfile::tempdir().unwrap();
    vitrine(temp_dir.path())
        .arg("overview")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"portfolio\s+4").unwrap())
        .stdout(predicate::str::is_match(r"team\s+3").unwrap());
}

/// The id column of the line in `listing` that mentions `needle`.
fn id_of(listing: &[u8], needle: &str) -> String {
    let text = String::from_utf8_lossy(listing);
    let line = text
        .lines()
        .find(|l| l.contains(needle))
        .unwrap_or_else(|| panic!("{} not listed in:\n{}", needle, text));
    line.split_whitespace().next().unwrap().to_string()
}

#[test]
fn test_seeded_service_can_be_deleted_by_listed_id() {
    let temp_dir = home();
    login(temp_dir.path());

    let listing = vitrine(temp_dir.path())
        .args(["services", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let id = id_of(&listing, "Otimização SEO");

    vitrine(temp_dir.path())
        .args(["services", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Service deleted"))
        .stdout(predicate::str::contains("Otimização SEO"));

    vitrine(temp_dir.path())
        .args(["services", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Otimização SEO").not())
        .stdout(predicate::str::contains("Marketing Digital"));
}

#[test]
fn test_team_members_can_be_updated_by_listed_id() {
    let temp_dir = home();
    login(temp_dir.path());

    let listing = vitrine(temp_dir.path())
        .args(["team", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let seeded = id_of(&listing, "Carlos Oliveira");

    vitrine(temp_dir.path())
        .args(["team", "update", &seeded, "--role", "CTO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Team member updated"));

    vitrine(temp_dir.path())
        .args([
            "team",
            "add",
            "--name",
            "Bia Souza",
            "--role",
            "Dev",
            "--bio",
            "Backend",
            "--image-url",
            "https://example.com/bia.png",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Team member added"));

    let listing = vitrine(temp_dir.path())
        .args(["team", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CTO"))
        .get_output()
        .stdout
        .clone();
    let added = id_of(&listing, "Bia Souza");
    assert_eq!(added.len(), 36);

    vitrine(temp_dir.path())
        .args(["team", "delete", &added])
        .assert()
        .success()
        .stdout(predicate::str::contains("Team member deleted"));

    vitrine(temp_dir.path())
        .args(["team", "show", &seeded])
        .assert()
        .success()
        .stdout(predicate::str::contains("CTO"));
}
