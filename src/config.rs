use serde::Serialize;
use utoipa::ToSchema;

#[derive(clap::Parser, Debug, Clone)]
#[command(version, about = "Pixel art avatar microservice")]
pub struct AppConfig {
    #[clap(long, env, value_enum, default_value_t = Stage::Dev)]
    pub stage: Stage,

    // App configs
    #[clap(long, env, default_value_t = 8080)]
    pub app_application_port: u16,

    #[clap(long, env, default_value = "0.0.0.0")]
    pub app_application_host: String,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[clap(rename_all = "kebab_case")]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Dev,
    Prod,
}
