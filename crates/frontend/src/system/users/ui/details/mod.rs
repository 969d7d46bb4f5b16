use crate::layout::notification_service::{use_notifications, NotificationService};
use crate::shared::modal::Modal;
use crate::shared::record_form::{bind_field, save_record};
use contracts::domain::common::AggregateId;
use contracts::shared::i18n::t;
use contracts::shared::record_list::RecordList;
use contracts::system::roles::Role;
use contracts::system::users::{ensure_unique_username, User, UserDto, UserId};
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Copy)]
pub struct UserDetailsViewModel {
    list: RwSignal<RecordList<User>>,
    pub id: Option<UserId>,
    pub form: RwSignal<UserDto>,
    pub error: RwSignal<Option<String>>,
}

impl UserDetailsViewModel {
    pub fn new(list: RwSignal<RecordList<User>>, id: Option<UserId>) -> Self {
        Self {
            list,
            id,
            form: RwSignal::new(list.with_untracked(|l| l.dto_for(id))),
            error: RwSignal::new(None),
        }
    }

    pub fn title(&self) -> String {
        if self.id.is_some() {
            "Редактирование пользователя".to_string()
        } else {
            "Новый пользователь".to_string()
        }
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| !f.username.trim().is_empty())
    }

    /// Логин проверяется на уникальность до сохранения
    pub fn save_command(&self, notifications: NotificationService, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        let unique = self
            .list
            .with_untracked(|l| ensure_unique_username(l, self.id, &current.username));
        if let Err(e) = unique {
            self.error.set(Some(e));
            return;
        }
        match save_record(self.list, self.id, &current, notifications) {
            Ok(_) => on_saved.run(()),
            Err(e) => self.error.set(Some(e)),
        }
    }
}

#[component]
pub fn UserDetails(
    list: RwSignal<RecordList<User>>,
    roles: RwSignal<RecordList<Role>>,
    id: Option<UserId>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = UserDetailsViewModel::new(list, id);
    let notifications = use_notifications();

    let username = bind_field(vm.form, |f| f.username.clone(), |f, v| f.username = v);
    let full_name = bind_field(vm.form, |f| f.full_name.clone(), |f, v| f.full_name = v);
    let email = bind_field(vm.form, |f| f.email.clone(), |f, v| f.email = v);
    let role = bind_field(
        vm.form,
        |f| f.role_id.map(|id| id.as_string()).unwrap_or_default(),
        |f, v| f.role_id = AggregateId::from_string(&v).ok(),
    );
    let is_active = bind_field(vm.form, |f| f.is_active, |f, v| f.is_active = v);

    let role_options = move || {
        roles.with(|l| {
            l.iter()
                .map(|r| view! { <option value=r.id.as_string()>{r.name.clone()}</option> })
                .collect_view()
        })
    };

    view! {
        <Modal title=vm.title() on_close=on_close>
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Flex vertical=true gap=FlexGap::Small>
                <div class="form__group">
                    <label class="form__label">"Логин *"</label>
                    <Input value=username placeholder="ivanov" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Полное имя"</label>
                    <Input value=full_name placeholder="Опционально" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Email"</label>
                    <Input value=email input_type=InputType::Email placeholder="Опционально" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Роль"</label>
                    <Select value=role>
                        <option value="">"— без роли —"</option>
                        {role_options}
                    </Select>
                </div>
                <Checkbox checked=is_active label="Активен" />
            </Flex>

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
