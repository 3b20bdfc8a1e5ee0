//! Server-side rendering of the site-counts block

use anyhow::{Context, Result};

use super::attributes::BlockAttributes;
use crate::host::{ContentHost, PostId};
use crate::markup::{esc_attr, esc_html};
use crate::query::{QueryFilter, StatusFilter};

/// Name the block registers under
pub const BLOCK_NAME: &str = "site-counts/counts";

// Constants of the filtered listing; the results heading echoes these
// verbatim, so filter construction and heading text must stay in sync.
const POSTS_PER_PAGE: usize = 5;
const TAG_FILTER: &str = "foo";
const CATEGORY_FILTER: &str = "baz";
const META_VALUE_FILTER: &str = "Accepted";
const POST_AFTER_HOUR: u32 = 9;
const POST_BEFORE_HOUR: u32 = 17;

/// Request context for one placement
///
/// The currently displayed item's id is passed in explicitly rather than
/// read from ambient host state; a placement outside any single item (an
/// archive page, say) carries `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockContext {
    pub current_post_id: Option<PostId>,
}

/// Render one placement of the block
///
/// Produces the full markup string: the public content-type counts, the
/// current item id, and the filtered listing (or its empty-state line).
/// `content` is the inner block content the host passes every dynamic
/// block; this block renders none.
pub fn render_counts(
    host: &dyn ContentHost,
    attributes: &BlockAttributes,
    _content: &str,
    context: &BlockContext,
) -> Result<String> {
    let post_id = context.current_post_id.unwrap_or(0);
    let class_name = attributes.class_name.as_deref().unwrap_or("");
    log::debug!("rendering {} for post {}", BLOCK_NAME, post_id);

    let mut out = String::new();
    out.push_str(&format!("<div class=\"{}\">\n", esc_attr(class_name)));

    out.push_str("<h2>Post Counts:</h2>\n<ul>\n");
    let types = host
        .list_public_types()
        .context("failed to enumerate public content types")?;
    for ty in &types {
        let count = host
            .count_by_status(&ty.slug, ty.visible_status())
            .with_context(|| format!("failed to count '{}' items", ty.slug))?
            .unwrap_or(0);
        let label = ty.display_name.as_deref().unwrap_or("");
        out.push_str(&format!(
            "<li>There are {} {}</li>\n",
            count,
            esc_html(label)
        ));
    }
    out.push_str("</ul>\n");

    out.push_str(&format!("<p>The current post ID is {}</p>\n", post_id));

    let mut builder = QueryFilter::builder()
        .post_type("post")
        .post_type("page")
        .limit(POSTS_PER_PAGE)
        .status(StatusFilter::Any)
        .hour_range(POST_AFTER_HOUR, POST_BEFORE_HOUR)
        .tag(TAG_FILTER)
        .category(CATEGORY_FILTER)
        .meta_value(META_VALUE_FILTER);
    if post_id != 0 {
        builder = builder.exclude(post_id);
    }
    let filter = builder.build()?;

    let results = host
        .run_query(&filter)
        .context("filtered post query failed")?;
    log::debug!(
        "listing query returned {} matches ({} total)",
        results.matches.len(),
        results.total_matches
    );

    if results.is_empty() {
        out.push_str("<p>Sorry, no posts matched your criteria.</p>\n");
    } else {
        out.push_str(&format!(
            "<h2>Any {} posts with the tag of {} and the category of {} where the custom field value is {}, regardless of the custom field key and posts between {}AM to {}PM</h2>\n",
            POSTS_PER_PAGE,
            esc_html(TAG_FILTER),
            esc_html(CATEGORY_FILTER),
            esc_html(META_VALUE_FILTER),
            POST_AFTER_HOUR,
            POST_BEFORE_HOUR
        ));
        out.push_str("<ul>\n");
        for m in &results.matches {
            out.push_str(&format!("<li>{}</li>\n", esc_html(&m.title)));
        }
        out.push_str("</ul>\n");
    }

    out.push_str("</div>\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::NaiveDateTime;

    use super::*;
    use crate::host::{ContentType, MemoryHost, Post, PostStatus, Site};

    fn listed_post(id: PostId, title: &str, hour: u32) -> Post {
        Post {
            id,
            title: title.to_string(),
            post_type: "post".to_string(),
            status: PostStatus::Publish,
            tags: vec!["foo".to_string()],
            categories: vec!["baz".to_string()],
            meta: HashMap::from([("review".to_string(), "Accepted".to_string())]),
            published_at: NaiveDateTime::parse_from_str(
                &format!("2024-05-14T{:02}:30:00", hour),
                "%Y-%m-%dT%H:%M:%S",
            )
            .unwrap(),
        }
    }

    fn content_type(slug: &str, label: &str, attachment_like: bool) -> ContentType {
        ContentType {
            slug: slug.to_string(),
            display_name: Some(label.to_string()),
            is_attachment_like: attachment_like,
        }
    }

    fn render(host: &MemoryHost, attributes: BlockAttributes, context: BlockContext) -> String {
        render_counts(host, &attributes, "", &context).unwrap()
    }

    #[test]
    fn test_published_count_line_per_public_type() {
        let site = Site {
            types: vec![content_type("post", "Posts", false)],
            posts: vec![
                listed_post(1, "One", 10),
                listed_post(2, "Two", 11),
                listed_post(3, "Three", 12),
            ],
        };
        let host = MemoryHost::new(site);
        let markup = render(&host, BlockAttributes::default(), BlockContext::default());
        assert!(markup.contains("<h2>Post Counts:</h2>"));
        assert!(markup.contains("<li>There are 3 Posts</li>"));
    }

    #[test]
    fn test_attachment_like_type_counts_inherit_bucket() {
        let mut media = Vec::new();
        for id in 1..=7 {
            let mut p = listed_post(id, "Scan", 10);
            p.post_type = "attachment".to_string();
            p.status = PostStatus::Inherit;
            media.push(p);
        }
        let site = Site {
            types: vec![content_type("attachment", "Media", true)],
            posts: media,
        };
        let host = MemoryHost::new(site);
        let markup = render(&host, BlockAttributes::default(), BlockContext::default());
        assert!(markup.contains("<li>There are 7 Media</li>"));
    }

    #[test]
    fn test_missing_display_name_renders_as_empty_label() {
        let site = Site {
            types: vec![ContentType {
                slug: "post".to_string(),
                display_name: None,
                is_attachment_like: false,
            }],
            posts: vec![],
        };
        let host = MemoryHost::new(site);
        let markup = render(&host, BlockAttributes::default(), BlockContext::default());
        assert!(markup.contains("<li>There are 0 </li>"));
    }

    #[test]
    fn test_unresolved_current_id_renders_as_zero() {
        let host = MemoryHost::new(Site::default());
        let markup = render(&host, BlockAttributes::default(), BlockContext::default());
        assert!(markup.contains("<p>The current post ID is 0</p>"));
    }

    #[test]
    fn test_resolved_current_id_is_echoed_and_excluded() {
        let site = Site {
            types: vec![content_type("post", "Posts", false)],
            posts: vec![listed_post(1, "Current", 10), listed_post(2, "Other", 11)],
        };
        let host = MemoryHost::new(site);
        let markup = render(
            &host,
            BlockAttributes::default(),
            BlockContext {
                current_post_id: Some(1),
            },
        );
        assert!(markup.contains("<p>The current post ID is 1</p>"));
        assert!(!markup.contains("<li>Current</li>"));
        assert!(markup.contains("<li>Other</li>"));
    }

    #[test]
    fn test_empty_result_renders_empty_state_without_listing() {
        let site = Site {
            types: vec![content_type("post", "Posts", false)],
            posts: vec![],
        };
        let host = MemoryHost::new(site);
        let markup = render(&host, BlockAttributes::default(), BlockContext::default());
        assert!(markup.contains("<p>Sorry, no posts matched your criteria.</p>"));
        assert!(!markup.contains("Any 5 posts"));
    }

    #[test]
    fn test_listing_heading_echoes_filter_constants() {
        let site = Site {
            types: vec![content_type("post", "Posts", false)],
            posts: vec![listed_post(1, "Hello & Welcome", 10)],
        };
        let host = MemoryHost::new(site);
        let markup = render(&host, BlockAttributes::default(), BlockContext::default());
        assert!(markup.contains(
            "<h2>Any 5 posts with the tag of foo and the category of baz where the custom \
             field value is Accepted, regardless of the custom field key and posts between \
             9AM to 17PM</h2>"
        ));
        assert!(markup.contains("<li>Hello &amp; Welcome</li>"));
    }

    #[test]
    fn test_matches_render_in_collaborator_order() {
        let site = Site {
            types: vec![content_type("post", "Posts", false)],
            posts: vec![
                listed_post(1, "Alpha", 10),
                listed_post(2, "Beta", 11),
                listed_post(3, "Gamma", 12),
            ],
        };
        let host = MemoryHost::new(site);
        let markup = render(&host, BlockAttributes::default(), BlockContext::default());
        let alpha = markup.find("<li>Alpha</li>").unwrap();
        let beta = markup.find("<li>Beta</li>").unwrap();
        let gamma = markup.find("<li>Gamma</li>").unwrap();
        assert!(alpha < beta && beta < gamma);
    }

    #[test]
    fn test_container_class_is_escaped_and_defaults_empty() {
        let host = MemoryHost::new(Site::default());
        let markup = render(&host, BlockAttributes::default(), BlockContext::default());
        assert!(markup.starts_with("<div class=\"\">"));

        let markup = render(
            &host,
            BlockAttributes {
                class_name: Some("counts \"wide\"".to_string()),
            },
            BlockContext::default(),
        );
        assert!(markup.starts_with("<div class=\"counts &quot;wide&quot;\">"));
    }

    #[test]
    fn test_render_restores_the_host_query_cursor() {
        let site = Site {
            types: vec![content_type("post", "Posts", false)],
            posts: vec![listed_post(1, "One", 10)],
        };
        let host = MemoryHost::new(site);
        render(&host, BlockAttributes::default(), BlockContext::default());
        assert!(host.current_query().is_none());
    }
}
