use crate::gateway::itinerary_response_schema;

pub fn execute() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&itinerary_response_schema())?;
    println!("{}", json);
    Ok(())
}
