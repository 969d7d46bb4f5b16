use super::view_model::ProjectDetailsViewModel;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::ui::{DateField, DecimalField};
use crate::shared::modal::Modal;
use crate::shared::record_form::bind_field;
use contracts::domain::a001_account::aggregate::Account;
use contracts::domain::a003_project::aggregate::{Project, ProjectId, ProjectStatus};
use contracts::domain::common::AggregateId;
use contracts::shared::i18n::t;
use contracts::shared::record_list::RecordList;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProjectDetails(
    list: RwSignal<RecordList<Project>>,
    accounts: RwSignal<RecordList<Account>>,
    id: Option<ProjectId>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = ProjectDetailsViewModel::new(list, id);
    let notifications = use_notifications();

    let code = bind_field(vm.form, |f| f.code.clone(), |f, v| f.code = v);
    let description = bind_field(vm.form, |f| f.description.clone(), |f, v| f.description = v);
    let client = bind_field(
        vm.form,
        |f| f.account_id.map(|id| id.as_string()).unwrap_or_default(),
        |f, v| f.account_id = AggregateId::from_string(&v).ok(),
    );
    let status = bind_field(
        vm.form,
        |f| f.status.as_str().to_string(),
        |f, v| {
            if let Some(status) = ProjectStatus::parse(&v) {
                f.status = status;
            }
        },
    );
    let comment = bind_field(
        vm.form,
        |f| f.comment.clone().unwrap_or_default(),
        |f, v| f.comment = (!v.is_empty()).then_some(v),
    );

    let clients = move || {
        accounts.with(|l| {
            l.iter()
                .filter(|a| a.is_customer())
                .map(|a| view! {
                    <option value=a.base.id.as_string()>{a.base.description.clone()}</option>
                })
                .collect_view()
        })
    };

    view! {
        <Modal title=vm.title() on_close=on_close>
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-grid--3col">
                <div class="form__group">
                    <label class="form__label">"Код *"</label>
                    <Input value=code placeholder="PRJ-001" />
                </div>
                <div class="form__group" style="grid-column: span 2;">
                    <label class="form__label">"Наименование *"</label>
                    <Input value=description placeholder="Введите наименование" />
                </div>
                <div class="form__group" style="grid-column: span 2;">
                    <label class="form__label">"Заказчик"</label>
                    <Select value=client>
                        <option value="">"— без заказчика —"</option>
                        {clients}
                    </Select>
                </div>
                <div class="form__group">
                    <label class="form__label">"Статус"</label>
                    <Select value=status>
                        {ProjectStatus::all().iter().map(|s| view! {
                            <option value=s.as_str()>{s.label()}</option>
                        }).collect_view()}
                    </Select>
                </div>
                <DateField
                    label="Начало *"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.start_date.clone()))
                    on_change=Callback::new(move |v| vm.form.update(|f| f.start_date = v))
                />
                <DateField
                    label="Окончание"
                    value=Signal::derive(move || vm.form.with(|f| f.end_date.clone()))
                    on_change=Callback::new(move |v| vm.form.update(|f| f.end_date = v))
                />
                <DecimalField
                    label="Бюджет"
                    min="0"
                    value=Signal::derive(move || vm.form.with(|f| f.budget))
                    on_change=Callback::new(move |v| vm.form.update(|f| f.budget = v))
                />
                <DecimalField
                    label="Ставка в час"
                    min="0"
                    value=Signal::derive(move || vm.form.with(|f| f.hourly_rate))
                    on_change=Callback::new(move |v| vm.form.update(|f| f.hourly_rate = v))
                />
                <div class="form__group" style="grid-column: 1 / -1;">
                    <label class="form__label">"Комментарий"</label>
                    <Textarea value=comment placeholder="Опционально" attr:rows=3 />
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
