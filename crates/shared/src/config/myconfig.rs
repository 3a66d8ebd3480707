use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    pub port: u16,
    pub pic_base_url: String,
    pub direct_delivery_url: Option<String>,
    pub direct_delivery_key: Option<String>,
}

impl CheckoutConfig {
    pub fn init() -> Result<Self> {
        let port = std::env::var("CHECKOUT_PORT")
            .context("Missing environment variable: CHECKOUT_PORT")?
            .parse::<u16>()
            .context("CHECKOUT_PORT must be a valid u16 integer")?;

        let pic_base_url = std::env::var("PIC_BASE_URL")
            .context("Missing environment variable: PIC_BASE_URL")?;

        let direct_delivery_url = std::env::var("DELIVERY_DIRECT_URL").ok();
        let direct_delivery_key = std::env::var("DELIVERY_DIRECT_KEY").ok();

        Ok(Self {
            port,
            pic_base_url,
            direct_delivery_url,
            direct_delivery_key,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ReservationConfig {
    pub archive_url: String,
    pub archive_container: String,
    pub archive_max_attempts: u32,
    pub archive_retry_interval_secs: u64,
    pub escalation_url: String,
    pub escalation_timeout_secs: u64,
}

impl ReservationConfig {
    pub fn init() -> Result<Self> {
        let archive_url = std::env::var("ARCHIVE_STORE_URL")
            .context("Missing environment variable: ARCHIVE_STORE_URL")?;

        let archive_container =
            std::env::var("ARCHIVE_CONTAINER").unwrap_or_else(|_| "order-archive".to_string());

        let archive_max_attempts = std::env::var("ARCHIVE_MAX_ATTEMPTS")
            .unwrap_or_else(|_| "3".to_string())
            .parse::<u32>()
            .context("ARCHIVE_MAX_ATTEMPTS must be a valid u32 integer")?;

        if archive_max_attempts == 0 {
            return Err(anyhow!("ARCHIVE_MAX_ATTEMPTS must be at least 1"));
        }

        let archive_retry_interval_secs = std::env::var("ARCHIVE_RETRY_INTERVAL_SECS")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<u64>()
            .context("ARCHIVE_RETRY_INTERVAL_SECS must be a valid u64 integer")?;

        let escalation_url = std::env::var("ESCALATION_WEBHOOK_URL")
            .context("Missing environment variable: ESCALATION_WEBHOOK_URL")?;

        let escalation_timeout_secs = std::env::var("ESCALATION_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .context("ESCALATION_TIMEOUT_SECS must be a valid u64 integer")?;

        Ok(Self {
            archive_url,
            archive_container,
            archive_max_attempts,
            archive_retry_interval_secs,
            escalation_url,
            escalation_timeout_secs,
        })
    }
}

#[derive(Debug, Clone)]
pub struct DeliveryConfig {
    pub port: u16,
}

impl DeliveryConfig {
    pub fn init() -> Result<Self> {
        let port = std::env::var("DELIVERY_PORT")
            .context("Missing environment variable: DELIVERY_PORT")?
            .parse::<u16>()
            .context("DELIVERY_PORT must be a valid u16 integer")?;

        Ok(Self { port })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub kafka_broker: String,
    pub run_migrations: bool,
    pub checkout: CheckoutConfig,
    pub reservation: ReservationConfig,
    pub delivery: DeliveryConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let kafka_broker = std::env::var("KAFKA").context("Missing environment variable: KAFKA")?;

        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let checkout = CheckoutConfig::init().context("failed checkout config")?;
        let reservation = ReservationConfig::init().context("failed reservation config")?;
        let delivery = DeliveryConfig::init().context("failed delivery config")?;

        Ok(Self {
            database_url,
            kafka_broker,
            run_migrations,
            checkout,
            reservation,
            delivery,
        })
    }
}
