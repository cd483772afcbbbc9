use mailscreen::Email;

static DEMO_EMAILS: [&str; 6] = [
    "invalid-email",
    "@domain.com",
    "user@",
    "user..name@domain.com",
    "user@domain",
    "user name@domain.com",
];

fn main() {
    dotenv::dotenv().ok();
    let _ = env_logger::try_init_from_env(env_logger::Env::new().default_filter_or("info"));

    for email in DEMO_EMAILS {
        println!("{}: {}", email, Email::apply(email));
    }

    log::info!("Checked {} addresses.", DEMO_EMAILS.len());
}
