use super::view_model::AccountDetailsViewModel;
use crate::layout::notification_service::use_notifications;
use crate::shared::modal::Modal;
use crate::shared::record_form::bind_field;
use contracts::domain::a001_account::aggregate::{Account, AccountId, AccountKind};
use contracts::shared::i18n::t;
use contracts::shared::record_list::RecordList;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AccountDetails(
    list: RwSignal<RecordList<Account>>,
    id: Option<AccountId>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = AccountDetailsViewModel::new(list, id);
    let notifications = use_notifications();

    let code = bind_field(vm.form, |f| f.code.clone(), |f, v| f.code = v);
    let description = bind_field(vm.form, |f| f.description.clone(), |f, v| f.description = v);
    let kind = bind_field(
        vm.form,
        |f| f.kind.as_str().to_string(),
        |f, v| {
            if let Some(kind) = AccountKind::parse(&v) {
                f.kind = kind;
            }
        },
    );
    let email = bind_field(vm.form, |f| f.email.clone(), |f, v| f.email = v);
    let phone = bind_field(vm.form, |f| f.phone.clone(), |f, v| f.phone = v);
    let tax_id = bind_field(vm.form, |f| f.tax_id.clone(), |f, v| f.tax_id = v);
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
                    <label class="form__label">"Код *"</label>
                    <Input value=code placeholder="C-0001" />
                </div>
                <div class="form__group" style="grid-column: span 2;">
                    <label class="form__label">"Наименование *"</label>
                    <Input value=description placeholder="Введите наименование" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Вид"</label>
                    <Select value=kind>
                        {AccountKind::all().iter().map(|k| view! {
                            <option value=k.as_str()>{k.label()}</option>
                        }).collect_view()}
                    </Select>
                </div>
                <div class="form__group">
                    <label class="form__label">"Email"</label>
                    <Input value=email input_type=InputType::Email placeholder="Опционально" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Телефон"</label>
                    <Input value=phone placeholder="Опционально" />
                </div>
                <div class="form__group">
                    <label class="form__label">"ИНН"</label>
                    <Input value=tax_id placeholder="Опционально" />
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
