use energy_budget_core::TrendSeries;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let trend = TrendSeries::default();

    if json {
        println!("{}", serde_json::to_string_pretty(&trend)?);
        return Ok(());
    }

    println!("{}", trend.render_ascii_chart());
    println!("Average energy this week: {:.0}%", trend.average_energy());
    Ok(())
}
