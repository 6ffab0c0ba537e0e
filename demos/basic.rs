use polymarket_api::{
    ClientOptions, EventsListParams, PnlPreset, PolymarketClient, PositionsParams,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let client = PolymarketClient::with_options(ClientOptions::from_env()?);

    let events = client
        .gamma()
        .events()
        .list(&EventsListParams {
            active: Some(true),
            closed: Some(false),
            order: Some("volume".to_owned()),
            ascending: Some(false),
            limit: Some(5),
            ..Default::default()
        })
        .await?;

    for event in &events {
        println!("{:>14.2}  {}", event.volume, event.title);
    }

    let Ok(user) = std::env::var("POLYMARKET_USER") else {
        return Ok(());
    };

    let positions = client
        .data()
        .positions(&PositionsParams {
            user: user.clone(),
            limit: Some(10),
            ..Default::default()
        })
        .await?;
    for position in positions {
        println!(
            "{:<40} {:>10.2} @ {:.3}",
            position.title, position.size, position.cur_price
        );
    }

    let history = client.pnl().user_pnl(&PnlPreset::WEEK.for_user(&user)).await;
    match history.last() {
        Some(point) => println!("portfolio value: ${:.2} ({} points)", point.p, history.len()),
        None => println!("no portfolio history for {user}"),
    }

    Ok(())
}
