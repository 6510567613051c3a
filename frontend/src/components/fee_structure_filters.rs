use yew::prelude::*;
use web_sys::{HtmlSelectElement, MouseEvent};
use shared::{fee_structure::distinct_values, FeeStructureFilter, FeeStructureSummary};

#[derive(Properties, PartialEq)]
pub struct FeeStructureFiltersProps {
    pub structures: Vec<FeeStructureSummary>,
    pub on_apply: Callback<FeeStructureFilter>,
}

/// Year and branch dropdowns; the filter only applies on "Apply"
#[function_component(FeeStructureFilters)]
pub fn fee_structure_filters(props: &FeeStructureFiltersProps) -> Html {
    let pending = use_state(FeeStructureFilter::default);

    let years = distinct_values(&props.structures, |s| s.academic_year.as_str());
    let branches = distinct_values(&props.structures, |s| s.branch.as_str());

    let on_year_change = {
        let pending = pending.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            pending.set(FeeStructureFilter { academic_year: select.value(), ..(*pending).clone() });
        })
    };

    let on_branch_change = {
        let pending = pending.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            pending.set(FeeStructureFilter { branch: select.value(), ..(*pending).clone() });
        })
    };

    let on_apply_click = {
        let pending = pending.clone();
        let on_apply = props.on_apply.clone();
        Callback::from(move |_: MouseEvent| on_apply.emit((*pending).clone()))
    };

    html! {
        <div class="row g-2 align-items-end mb-4">
            <div class="col-md-4">
                <label for="academicYearFilter" class="form-label">{"Academic Year"}</label>
                <select id="academicYearFilter" class="form-select" onchange={on_year_change}>
                    <option value="all">{"All Years"}</option>
                    {for years.iter().map(|year| html! {
                        <option value={year.clone()} selected={pending.academic_year == *year}>{year}</option>
                    })}
                </select>
            </div>
            <div class="col-md-4">
                <label for="branchFilter" class="form-label">{"Branch"}</label>
                <select id="branchFilter" class="form-select" onchange={on_branch_change}>
                    <option value="all">{"All Branches"}</option>
                    {for branches.iter().map(|branch| html! {
                        <option value={branch.clone()} selected={pending.branch == *branch}>{branch}</option>
                    })}
                </select>
            </div>
            <div class="col-md-2">
                <button type="button" id="applyFiltersBtn" class="btn btn-primary w-100" onclick={on_apply_click}>
                    {"Apply"}
                </button>
            </div>
        </div>
    }
}
