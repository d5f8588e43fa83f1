use atelier_domain::ResourceFilter;
use sqlx::{Postgres, QueryBuilder};

/// Appends the SQL condition for a resource filter.
///
/// `table_alias` names the queried table, which must expose an `owner_id`
/// text column. Studio filters join `creator_assignments` so studio
/// membership is read at query time.
pub fn push_resource_filter(
    builder: &mut QueryBuilder<'_, Postgres>,
    filter: &ResourceFilter,
    table_alias: &str,
) {
    match filter {
        ResourceFilter::Unrestricted => {
            builder.push("TRUE");
        }
        ResourceFilter::MatchNothing => {
            builder.push("FALSE");
        }
        ResourceFilter::OwnerEquals(creator_id) => {
            builder.push(table_alias);
            builder.push(".owner_id = ");
            builder.push_bind(creator_id.as_str().to_owned());
        }
        ResourceFilter::OwnerIn(owners) => {
            if owners.is_empty() {
                builder.push("FALSE");
                return;
            }

            let owners: Vec<String> = owners
                .iter()
                .map(|owner| owner.as_str().to_owned())
                .collect();
            builder.push(table_alias);
            builder.push(".owner_id = ANY(");
            builder.push_bind(owners);
            builder.push(')');
        }
        ResourceFilter::OwnerStudioEquals(studio_id) => {
            builder.push(
                "EXISTS (SELECT 1 FROM creator_assignments AS assignments \
                 WHERE assignments.creator_id = ",
            );
            builder.push(table_alias);
            builder.push(".owner_id AND assignments.studio_id = ");
            builder.push_bind(studio_id.as_str().to_owned());
            builder.push(')');
        }
    }
}
