use super::logging;
use super::render::{
    print_messages, render_config, render_overview, render_portfolio, render_portfolio_item,
    render_service, render_services, render_session, render_settings, render_team,
    render_team_member,
};
use super::setup::{
    Cli, Commands, ContentCommands, PortfolioCommands, PortfolioFields, ServiceCommands,
    ServiceFields, SettingsCommands, TeamCommands, TeamFields,
};
use clap::Parser;
use directories::ProjectDirs;
use std::io::Read;
use std::path::PathBuf;
use vitrine::api::{
    CmdResult, ConfigAction, PortfolioPatch, ServicePatch, SettingsPatch, TeamPatch, VitrineApi,
    VitrinePaths,
};
use vitrine::config::VitrineConfig;
use vitrine::content::SectionId;
use vitrine::error::{Result, VitrineError};
use vitrine::model::{PortfolioDraft, ServiceDraft, Socials, TeamMemberDraft};
use vitrine::store::fs_backend::FsBackend;

const HOME_ENV: &str = "VITRINE_HOME";

struct AppContext {
    api: VitrineApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    let config = VitrineConfig::load(&data_dir)?;
    logging::init(cli.verbose, &config.log_level);
    tracing::debug!(data_dir = %data_dir.display(), "starting");

    let mut ctx = init_context(data_dir, &config);

    let result = match cli.command {
        Commands::Login { email, password } => handle_login(&mut ctx, &email, &password),
        Commands::Logout => handle_logout(&mut ctx),
        Commands::Whoami => handle_whoami(&ctx),
        Commands::Overview => handle_overview(&ctx),
        Commands::Portfolio(cmd) => handle_portfolio(&mut ctx, cmd),
        Commands::Services(cmd) => handle_services(&mut ctx, cmd),
        Commands::Team(cmd) => handle_team(&mut ctx, cmd),
        Commands::Content(cmd) => handle_content(&mut ctx, cmd),
        Commands::Settings(cmd) => handle_settings(&mut ctx, cmd),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    };

    for (key, status) in ctx.api.persist_report() {
        if status.is_failed() {
            tracing::warn!(key, ?status, "changes kept in memory only");
        }
    }
    result
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "vitrine", "vitrine")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            VitrineError::Config(format!(
                "Could not determine a data directory; pass --data-dir or set {}",
                HOME_ENV
            ))
        })
}

fn init_context(data_dir: PathBuf, config: &VitrineConfig) -> AppContext {
    let backend = FsBackend::new(data_dir.clone());
    let paths = VitrinePaths { data: data_dir };
    AppContext {
        api: VitrineApi::new(backend, paths, config),
    }
}

fn finish(result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    Ok(())
}

fn handle_login(ctx: &mut AppContext, email: &str, password: &str) -> Result<()> {
    finish(ctx.api.login(email, password)?)
}

fn handle_logout(ctx: &mut AppContext) -> Result<()> {
    finish(ctx.api.logout()?)
}

fn handle_whoami(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.whoami()?;
    if let Some(session) = &result.session {
        print!("{}", render_session(session));
    }
    finish(result)
}

fn handle_overview(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.overview()?;
    if let Some(overview) = &result.overview {
        print!("{}", render_overview(overview));
    }
    finish(result)
}

fn handle_portfolio(ctx: &mut AppContext, cmd: PortfolioCommands) -> Result<()> {
    match cmd {
        PortfolioCommands::List => {
            let result = ctx.api.list_portfolio()?;
            print!("{}", render_portfolio(&result.portfolio));
            finish(result)
        }
        PortfolioCommands::Show { id } => {
            let result = ctx.api.show_portfolio(&id)?;
            for item in &result.portfolio {
                print!("{}", render_portfolio_item(item));
            }
            finish(result)
        }
        PortfolioCommands::Add(fields) => {
            let patch = portfolio_patch(fields);
            let draft = PortfolioDraft {
                image_url: patch.image_url.unwrap_or_default(),
                title: patch.title.unwrap_or_default(),
                category: patch.category.unwrap_or_default(),
                desafio: non_empty(patch.desafio),
                solucao: non_empty(patch.solucao),
                resultados: non_empty(patch.resultados),
            };
            finish(ctx.api.add_portfolio(draft)?)
        }
        PortfolioCommands::Update { id, fields } => {
            finish(ctx.api.patch_portfolio(&id, portfolio_patch(fields))?)
        }
        PortfolioCommands::Delete { id } => finish(ctx.api.delete_portfolio(&id)?),
    }
}

fn handle_services(ctx: &mut AppContext, cmd: ServiceCommands) -> Result<()> {
    match cmd {
        ServiceCommands::List => {
            let result = ctx.api.list_services()?;
            print!("{}", render_services(&result.services));
            finish(result)
        }
        ServiceCommands::Show { id } => {
            let result = ctx.api.show_service(&id)?;
            for item in &result.services {
                print!("{}", render_service(item));
            }
            finish(result)
        }
        ServiceCommands::Add(fields) => {
            let patch = service_patch(fields)?;
            let draft = ServiceDraft {
                icon: patch.icon.unwrap_or_default(),
                title: patch.title.unwrap_or_default(),
                description: patch.description.unwrap_or_default(),
            };
            finish(ctx.api.add_service(draft)?)
        }
        ServiceCommands::Update { id, fields } => {
            let patch = service_patch(fields)?;
            finish(ctx.api.patch_service(&id, patch)?)
        }
        ServiceCommands::Delete { id } => finish(ctx.api.delete_service(&id)?),
    }
}

fn handle_team(ctx: &mut AppContext, cmd: TeamCommands) -> Result<()> {
    match cmd {
        TeamCommands::List => {
            let result = ctx.api.list_team()?;
            print!("{}", render_team(&result.team));
            finish(result)
        }
        TeamCommands::Show { id } => {
            let result = ctx.api.show_team_member(&id)?;
            for member in &result.team {
                print!("{}", render_team_member(member));
            }
            finish(result)
        }
        TeamCommands::Add(fields) => {
            let patch = team_patch(fields);
            let draft = TeamMemberDraft {
                image_url: patch.image_url.unwrap_or_default(),
                name: patch.name.unwrap_or_default(),
                role: patch.role.unwrap_or_default(),
                bio: patch.bio.unwrap_or_default(),
                socials: Socials {
                    linkedin: non_empty(patch.linkedin),
                    twitter: non_empty(patch.twitter),
                    github: non_empty(patch.github),
                },
            };
            finish(ctx.api.add_team_member(draft)?)
        }
        TeamCommands::Update { id, fields } => {
            finish(ctx.api.patch_team_member(&id, team_patch(fields))?)
        }
        TeamCommands::Delete { id } => finish(ctx.api.delete_team_member(&id)?),
    }
}

fn handle_content(ctx: &mut AppContext, cmd: ContentCommands) -> Result<()> {
    match cmd {
        ContentCommands::Show { section } => {
            let section = section.map(|s| s.parse::<SectionId>()).transpose()?;
            let result = ctx.api.show_content(section)?;
            if let Some(content) = &result.content {
                println!("{}", serde_json::to_string_pretty(content)?);
            }
            if let Some((_, value)) = &result.section {
                println!("{}", serde_json::to_string_pretty(value)?);
            }
            finish(result)
        }
        ContentCommands::Set { section, source } => {
            let section: SectionId = section.parse()?;
            let raw = read_source(&source)?;
            finish(ctx.api.save_section_json(section, &raw)?)
        }
    }
}

fn handle_settings(ctx: &mut AppContext, cmd: SettingsCommands) -> Result<()> {
    let result = match cmd {
        SettingsCommands::Show => ctx.api.show_settings()?,
        SettingsCommands::Set {
            site_name,
            whatsapp,
            accent,
        } => ctx.api.save_settings(SettingsPatch {
            site_name,
            whatsapp_number: whatsapp,
            accent_color: accent,
        })?,
    };
    if let Some(settings) = &result.settings {
        print!("{}", render_settings(settings));
    }
    finish(result)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    finish(result)
}

fn portfolio_patch(fields: PortfolioFields) -> PortfolioPatch {
    PortfolioPatch {
        title: fields.title,
        category: fields.category,
        image_url: fields.image_url,
        desafio: fields.desafio,
        solucao: fields.solucao,
        resultados: fields.resultados,
    }
}

fn service_patch(fields: ServiceFields) -> Result<ServicePatch> {
    let icon = match fields.icon_file {
        Some(path) => Some(std::fs::read_to_string(path)?),
        None => fields.icon,
    };
    Ok(ServicePatch {
        icon,
        title: fields.title,
        description: fields.description,
    })
}

fn team_patch(fields: TeamFields) -> TeamPatch {
    TeamPatch {
        image_url: fields.image_url,
        name: fields.name,
        role: fields.role,
        bio: fields.bio,
        linkedin: fields.linkedin,
        twitter: fields.twitter,
        github: fields.github,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Read a JSON payload from a file path, or from stdin when `source` is `-`.
fn read_source(source: &str) -> Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(std::fs::read_to_string(source)?)
    }
}
