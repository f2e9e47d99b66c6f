use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::facts::{Claim, Progress, SearchQuery, fetch_all};
use crate::publisher::{PublisherOptions, SortKey, process};
use crate::reports::{generate_listing_json, generate_listing_table};
use clap::Parser;

#[derive(Parser, Debug)]
pub struct PublisherArgs {
    /// npm user name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Sort by 'date', 'name', 'version', 'quality', 'popularity', 'maintenance', or 'score'
    #[arg(long, short = 's', value_name = "KEY")]
    pub sort: Option<String>,

    /// Reverse sort order
    #[arg(long, short = 'r')]
    pub reverse: bool,

    /// Filter packages by org
    #[arg(long, short = 'o', value_name = "ORG")]
    pub org: Option<String>,

    /// Limit the number of packages returned
    #[arg(long, short = 'l', value_name = "COUNT")]
    pub limit: Option<usize>,

    /// Print the listing as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// List every package the user claims, narrowed and ordered per the arguments.
pub async fn process_publisher<H: Host>(host: &mut H, claim: Claim, args: &PublisherArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;

    let options = PublisherOptions {
        sort: args.sort.as_deref().map_or(common.config.default_sort, SortKey::parse_lenient),
        reverse: args.reverse,
        org: args.org.clone(),
        limit: args.limit,
    };

    let query = SearchQuery::new(claim, &args.name);
    let results = fetch_all(&common.client, &query, common.config.page_size, common.config.max_pages, &common.progress).await;
    common.progress.done();

    let listing = process(results?, &options);
    if listing.is_empty() {
        common.emit_error(&format!("No packages found for '{query}'"));
    }

    let mut output = String::new();
    if args.json {
        generate_listing_json(&listing, &mut output)?;
    } else {
        generate_listing_table(&listing, common.use_colors(), &mut output)?;
    }
    common.emit(&output);

    Ok(())
}
