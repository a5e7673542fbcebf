use crate::components::filter_bar::FilterBar;
use crate::components::pager::Pager;
use crate::components::policy_card::PolicyCard;
use policyhub_core::{ListFilter, Policy, PolicyPage, category_options, year_options};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct PolicyListPageProps {
    pub page: PolicyPage,
    #[prop_or_default]
    pub filter_year: AttrValue,
    #[prop_or_default]
    pub filter_category: AttrValue,
    pub on_filter_year: Callback<String>,
    pub on_filter_category: Callback<String>,
    pub on_add_policy: Callback<()>,
    pub on_view: Callback<String>,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
}

/// Cards to show for the current page under the selected filters.
///
/// Filters run over the already-paginated slice, so matches on other pages
/// are not shown.
// TODO: filter the full collection before paginating and derive page counts from the filtered set.
#[must_use]
pub fn visible_policies(page: &PolicyPage, year: &str, category: &str) -> Vec<Policy> {
    ListFilter::from_selection(year, category).apply(&page.items)
}

#[function_component(PolicyListPage)]
pub fn policy_list_page(props: &PolicyListPageProps) -> Html {
    let visible = visible_policies(&props.page, &props.filter_year, &props.filter_category);

    let list = if visible.is_empty() {
        html! { <p class="text-center">{ "No policies available." }</p> }
    } else {
        html! {
            <>
                { for visible.into_iter().map(|policy| {
                    let key = policy.id.clone();
                    html! { <PolicyCard key={key} {policy} on_view={props.on_view.clone()} /> }
                })}
            </>
        }
    };

    html! {
        <section data-testid="policy-list">
            <FilterBar
                years={year_options(&props.page.items)}
                categories={category_options(&props.page.items)}
                year={props.filter_year.clone()}
                category={props.filter_category.clone()}
                on_year={props.on_filter_year.clone()}
                on_category={props.on_filter_category.clone()}
                on_add_policy={props.on_add_policy.clone()}
            />
            <div class="space-y-6">{ list }</div>
            <Pager
                current_page={props.page.current_page}
                total_pages={props.page.total_pages}
                on_previous={props.on_previous.clone()}
                on_next={props.on_next.clone()}
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::visible_policies;
    use policyhub_core::{Policy, PolicyPage};

    fn policy(id: &str, date: &str, votes: usize) -> Policy {
        Policy {
            id: id.into(),
            title: id.into(),
            description: String::new(),
            owner: "o".into(),
            date: date.into(),
            category: "Academic".into(),
            votes: (0..votes).map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn filters_only_the_current_page_slice() {
        let page = PolicyPage {
            items: vec![policy("a", "2023-01-01", 1), policy("b", "2024-01-01", 3)],
            current_page: 1,
            total_pages: 2,
            total: 9,
        };
        let ids: Vec<_> = visible_policies(&page, "2023", "")
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["a"]);
    }
}
