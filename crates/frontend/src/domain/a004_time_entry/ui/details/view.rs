use super::view_model::TimeEntryDetailsViewModel;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::ui::{DateField, DecimalField};
use crate::shared::modal::Modal;
use crate::shared::record_form::bind_field;
use contracts::domain::a003_project::aggregate::Project;
use contracts::domain::a004_time_entry::aggregate::{TimeEntry, TimeEntryId};
use contracts::domain::common::AggregateId;
use contracts::shared::i18n::t;
use contracts::shared::record_list::RecordList;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TimeEntryDetails(
    list: RwSignal<RecordList<TimeEntry>>,
    projects: RwSignal<RecordList<Project>>,
    id: Option<TimeEntryId>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = TimeEntryDetailsViewModel::new(list, id);
    let notifications = use_notifications();

    let project = bind_field(
        vm.form,
        |f| f.project_id.map(|id| id.as_string()).unwrap_or_default(),
        |f, v| f.project_id = AggregateId::from_string(&v).ok(),
    );
    let description = bind_field(vm.form, |f| f.description.clone(), |f, v| f.description = v);
    let billable = bind_field(vm.form, |f| f.billable, |f, v| f.billable = v);

    let project_options = move || {
        projects.with(|l| {
            l.iter()
                .map(|p| view! {
                    <option value=p.base.id.as_string()>
                        {format!("{} {}", p.base.code, p.base.description)}
                    </option>
                })
                .collect_view()
        })
    };

    view! {
        <Modal title=vm.title() on_close=on_close>
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-grid--3col">
                <div class="form__group" style="grid-column: 1 / -1;">
                    <label class="form__label">"Проект *"</label>
                    <Select value=project>
                        <option value="">"— выберите —"</option>
                        {project_options}
                    </Select>
                </div>
                <DateField
                    label="Дата *"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.date.clone()))
                    on_change=Callback::new(move |v| vm.form.update(|f| f.date = v))
                />
                <DecimalField
                    label="Часы"
                    min="0"
                    step="0.25"
                    value=Signal::derive(move || vm.form.with(|f| f.hours))
                    on_change=Callback::new(move |v| vm.form.update(|f| f.hours = v))
                />
                <div class="form__group" style="grid-column: 1 / -1;">
                    <label class="form__label">"Работа"</label>
                    <Input value=description placeholder="Что сделано" />
                </div>
                <div class="details-flags" style="grid-column: 1 / -1;">
                    <Checkbox checked=billable label="Оплачиваемое время" />
                </div>
            </div>

            <Flex gap=FlexGap::Small justify=FlexJustify::End>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(notifications, on_close)
                    disabled=Signal::derive(move || !vm.is_form_valid())
                >
                    {t("action.save")}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    {t("action.cancel")}
                </Button>
            </Flex>
        </Modal>
    }
}
