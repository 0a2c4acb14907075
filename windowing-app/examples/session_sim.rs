// Example: a scripted session through the login gate and the windowed listing.
//
// Usage: `cargo run -p windowing-app --example session_sim -- [--http] [config.json]`
//
// `--http` fetches from `api_base_url` instead of the in-process fixture.
use windowing_app::{
    App, AppConfig, AppEvent, FakeAuthenticator, Field, FileSessionStore, FixturePhotoSource,
    HttpPhotoSource, MemorySessionStore, PhotoSource, Session, SessionStore, logging,
};

fn main() -> windowing_app::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let http = args.iter().any(|a| a == "--http");
    let config = match args.iter().find(|a| !a.starts_with("--")) {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    logging::init(&config.log_filter);

    let store: Box<dyn SessionStore> = match &config.session_path {
        Some(path) => Box::new(FileSessionStore::new(path)),
        None => Box::new(MemorySessionStore::default()),
    };
    let session = Session::restore(store)?;
    let source: Box<dyn PhotoSource> = if http {
        Box::new(HttpPhotoSource::from_config(&config)?)
    } else {
        Box::new(
            FixturePhotoSource::new(config.photo_limit).with_timeout_ms(config.request_timeout_ms),
        )
    };
    let mut app = App::new(
        config,
        session,
        Box::new(FakeAuthenticator::default()),
        source,
    )?;

    let script = [
        AppEvent::Navigate("/home".into()),
        AppEvent::Submit,
        AppEvent::Input(Field::Email, "user@example.com".into()),
        AppEvent::Input(Field::Password, "hunter2".into()),
        AppEvent::Submit,
        AppEvent::Scroll(1000),
        AppEvent::Resize(300),
        AppEvent::PageDown,
        AppEvent::Bottom,
        AppEvent::Logout,
    ];

    println!("{}", app.render());
    for event in script {
        println!("> {event:?}");
        app.handle(event)?;
        println!("{}", app.render());
    }
    Ok(())
}
