use super::lines::PurchaseOrderLines;
use super::view_model::PurchaseOrderDetailsViewModel;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::totals_panel::TotalsPanel;
use crate::shared::components::ui::DateField;
use crate::shared::modal::Modal;
use crate::shared::record_form::bind_field;
use contracts::domain::a001_account::aggregate::Account;
use contracts::domain::a007_purchase_order::aggregate::{
    PurchaseOrder, PurchaseOrderId, PurchaseOrderStatus,
};
use contracts::domain::common::AggregateId;
use contracts::shared::i18n::t;
use contracts::shared::record_list::RecordList;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PurchaseOrderDetails(
    list: RwSignal<RecordList<PurchaseOrder>>,
    accounts: RwSignal<RecordList<Account>>,
    id: Option<PurchaseOrderId>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = PurchaseOrderDetailsViewModel::new(list, id);
    let notifications = use_notifications();

    let code = bind_field(vm.form, |f| f.code.clone(), |f, v| f.code = v);
    let description = bind_field(vm.form, |f| f.description.clone(), |f, v| f.description = v);
    let supplier = bind_field(
        vm.form,
        |f| f.supplier_id.map(|id| id.as_string()).unwrap_or_default(),
        |f, v| f.supplier_id = AggregateId::from_string(&v).ok(),
    );
    let status = bind_field(
        vm.form,
        |f| f.status.as_str().to_string(),
        |f, v| {
            if let Some(status) = PurchaseOrderStatus::parse(&v) {
                f.status = status;
            }
        },
    );
    let comment = bind_field(
        vm.form,
        |f| f.comment.clone().unwrap_or_default(),
        |f, v| f.comment = (!v.is_empty()).then_some(v),
    );

    let suppliers = move || {
        accounts.with(|l| {
            l.iter()
                .filter(|a| a.is_supplier())
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
                    <label class="form__label">"Номер *"</label>
                    <Input value=code placeholder="PO-0001" />
                </div>
                <div class="form__group" style="grid-column: span 2;">
                    <label class="form__label">"Описание *"</label>
                    <Input value=description />
                </div>
                <div class="form__group" style="grid-column: span 2;">
                    <label class="form__label">"Поставщик *"</label>
                    <Select value=supplier>
                        <option value="">"— выберите —"</option>
                        {suppliers}
                    </Select>
                </div>
                <div class="form__group">
                    <label class="form__label">"Статус"</label>
                    <Select value=status>
                        {PurchaseOrderStatus::all().iter().map(|s| view! {
                            <option value=s.as_str()>{s.label()}</option>
                        }).collect_view()}
                    </Select>
                </div>
                <DateField
                    label="Дата заказа *"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.order_date.clone()))
                    on_change=Callback::new(move |v| vm.form.update(|f| f.order_date = v))
                />
                <DateField
                    label="Ожидаемая дата"
                    value=Signal::derive(move || vm.form.with(|f| f.expected_date.clone()))
                    on_change=Callback::new(move |v| vm.form.update(|f| f.expected_date = v))
                />
            </div>

            <PurchaseOrderLines vm=vm />

            <TotalsPanel totals=Signal::derive(move || vm.totals()) />

            <div class="form__group">
                <label class="form__label">"Комментарий"</label>
                <Textarea value=comment placeholder="Опционально" attr:rows=3 />
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
