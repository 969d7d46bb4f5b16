use super::view_model::BankTransactionDetailsViewModel;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::ui::{DateField, DecimalField};
use crate::shared::modal::Modal;
use crate::shared::record_form::bind_field;
use contracts::domain::a005_bank_account::aggregate::BankAccount;
use contracts::domain::a006_bank_transaction::aggregate::{BankTransaction, BankTransactionId, Direction};
use contracts::domain::common::AggregateId;
use contracts::shared::i18n::t;
use contracts::shared::record_list::RecordList;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn BankTransactionDetails(
    list: RwSignal<RecordList<BankTransaction>>,
    accounts: RwSignal<RecordList<BankAccount>>,
    id: Option<BankTransactionId>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = BankTransactionDetailsViewModel::new(list, id);
    let notifications = use_notifications();

    let code = bind_field(vm.form, |f| f.code.clone(), |f, v| f.code = v);
    let account = bind_field(
        vm.form,
        |f| f.bank_account_id.map(|id| id.as_string()).unwrap_or_default(),
        |f, v| f.bank_account_id = AggregateId::from_string(&v).ok(),
    );
    let direction = bind_field(
        vm.form,
        |f| f.direction.as_str().to_string(),
        |f, v| {
            if let Some(direction) = Direction::parse(&v) {
                f.direction = direction;
            }
        },
    );
    let description = bind_field(vm.form, |f| f.description.clone(), |f, v| f.description = v);
    let reconciled = bind_field(vm.form, |f| f.reconciled, |f, v| f.reconciled = v);
    let comment = bind_field(
        vm.form,
        |f| f.comment.clone().unwrap_or_default(),
        |f, v| f.comment = (!v.is_empty()).then_some(v),
    );

    let account_options = move || {
        accounts.with(|l| {
            l.iter()
                .map(|a| view! {
                    <option value=a.base.id.as_string()>
                        {format!("{} ({})", a.base.description, a.currency)}
                    </option>
                })
                .collect_view()
        })
    };

    view! {
        <Modal title=vm.title() on_close=on_close>
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {vm.external_ref.get_value().map(|r| view! {
                <div class="details-note">"Идентификатор в банке: " {r}</div>
            })}

            <div class="details-grid--3col">
                <div class="form__group">
                    <label class="form__label">"Номер документа"</label>
                    <Input value=code placeholder="по умолчанию из ID" />
                </div>
                <div class="form__group" style="grid-column: span 2;">
                    <label class="form__label">"Счёт *"</label>
                    <Select value=account>
                        <option value="">"— выберите —"</option>
                        {account_options}
                    </Select>
                </div>
                <DateField
                    label="Дата *"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.date.clone()))
                    on_change=Callback::new(move |v| vm.form.update(|f| f.date = v))
                />
                <div class="form__group">
                    <label class="form__label">"Направление"</label>
                    <Select value=direction>
                        {Direction::all().iter().map(|d| view! {
                            <option value=d.as_str()>{d.label()}</option>
                        }).collect_view()}
                    </Select>
                </div>
                <DecimalField
                    label="Сумма"
                    min="0"
                    value=Signal::derive(move || vm.form.with(|f| f.amount))
                    on_change=Callback::new(move |v| vm.form.update(|f| f.amount = v))
                />
                <div class="form__group" style="grid-column: 1 / -1;">
                    <label class="form__label">"Назначение платежа *"</label>
                    <Input value=description />
                </div>
                <div class="details-flags" style="grid-column: 1 / -1;">
                    <Checkbox checked=reconciled label="Сверено" />
                </div>
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
