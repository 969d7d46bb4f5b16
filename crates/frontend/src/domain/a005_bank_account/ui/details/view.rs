use super::view_model::BankAccountDetailsViewModel;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::ui::DecimalField;
use crate::shared::modal::Modal;
use crate::shared::record_form::bind_field;
use contracts::domain::a005_bank_account::aggregate::{BankAccount, BankAccountId};
use contracts::shared::i18n::t;
use contracts::shared::record_list::RecordList;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn BankAccountDetails(
    list: RwSignal<RecordList<BankAccount>>,
    id: Option<BankAccountId>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = BankAccountDetailsViewModel::new(list, id);
    let notifications = use_notifications();

    let code = bind_field(vm.form, |f| f.code.clone(), |f, v| f.code = v);
    let description = bind_field(vm.form, |f| f.description.clone(), |f, v| f.description = v);
    let bank_name = bind_field(vm.form, |f| f.bank_name.clone(), |f, v| f.bank_name = v);
    let currency = bind_field(vm.form, |f| f.currency.clone(), |f, v| f.currency = v.to_uppercase());
    let is_active = bind_field(vm.form, |f| f.is_active, |f, v| f.is_active = v);
    let comment = bind_field(
        vm.form,
        |f| f.comment.clone().unwrap_or_default(),
        |f, v| f.comment = (!v.is_empty()).then_some(v),
    );

    view! {
        <Modal title=vm.title() on_close=on_close>
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-grid--3col">
                <div class="form__group">
                    <label class="form__label">"Номер счёта *"</label>
                    <Input value=code placeholder="40702-001" />
                </div>
                <div class="form__group" style="grid-column: span 2;">
                    <label class="form__label">"Наименование *"</label>
                    <Input value=description placeholder="Введите наименование" />
                </div>
                <div class="form__group" style="grid-column: span 2;">
                    <label class="form__label">"Банк *"</label>
                    <Input value=bank_name />
                </div>
                <div class="form__group">
                    <label class="form__label">"Валюта *"</label>
                    <Input value=currency placeholder="USD" />
                </div>
                // остаток меняют операции и синхронизация, вручную задаётся только начальный
                {(!vm.is_edit_mode()).then(|| view! {
                    <DecimalField
                        label="Начальный остаток"
                        value=Signal::derive(move || vm.form.with(|f| f.balance))
                        on_change=Callback::new(move |v| vm.form.update(|f| f.balance = v))
                    />
                })}
                <div class="details-flags" style="grid-column: 1 / -1;">
                    <Checkbox checked=is_active label="Активен" />
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
