use crate::layout::notification_service::{use_notifications, NotificationService};
use crate::shared::modal::Modal;
use crate::shared::record_form::{bind_field, save_record};
use contracts::shared::i18n::t;
use contracts::shared::record_list::RecordList;
use contracts::system::roles::{Permission, Role, RoleDto, RoleId};
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Copy)]
pub struct RoleDetailsViewModel {
    list: RwSignal<RecordList<Role>>,
    pub id: Option<RoleId>,
    pub form: RwSignal<RoleDto>,
    pub error: RwSignal<Option<String>>,
}

impl RoleDetailsViewModel {
    pub fn new(list: RwSignal<RecordList<Role>>, id: Option<RoleId>) -> Self {
        Self {
            list,
            id,
            form: RwSignal::new(list.with_untracked(|l| l.dto_for(id))),
            error: RwSignal::new(None),
        }
    }

    pub fn title(&self) -> String {
        if self.id.is_some() {
            "Редактирование роли".to_string()
        } else {
            "Новая роль".to_string()
        }
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.form.with(|f| f.permissions.contains(&permission))
    }

    pub fn set_permission(&self, permission: Permission, enabled: bool) {
        self.form.update(|f| f.toggle(permission, enabled));
    }

    pub fn save_command(&self, notifications: NotificationService, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        match save_record(self.list, self.id, &current, notifications) {
            Ok(_) => on_saved.run(()),
            Err(e) => self.error.set(Some(e)),
        }
    }
}

#[component]
pub fn RoleDetails(
    list: RwSignal<RecordList<Role>>,
    id: Option<RoleId>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = RoleDetailsViewModel::new(list, id);
    let notifications = use_notifications();

    let name = bind_field(vm.form, |f| f.name.clone(), |f, v| f.name = v);
    let description = bind_field(vm.form, |f| f.description.clone(), |f, v| f.description = v);

    let permission_box = move |permission: Permission| {
        let checked = RwSignal::new(vm.form.with_untracked(|f| f.permissions.contains(&permission)));
        Effect::new(move |_| {
            let enabled = checked.get();
            if vm.form.with_untracked(|f| f.permissions.contains(&permission)) != enabled {
                vm.set_permission(permission, enabled);
            }
        });
        view! { <Checkbox checked=checked label=permission.label() /> }
    };

    view! {
        <Modal title=vm.title() on_close=on_close>
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Flex vertical=true gap=FlexGap::Small>
                <div class="form__group">
                    <label class="form__label">"Название *"</label>
                    <Input value=name placeholder="Бухгалтер" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Описание"</label>
                    <Textarea value=description placeholder="Опционально" attr:rows=3 />
                </div>
            </Flex>

            <fieldset class="details-permissions">
                <legend>"Права"</legend>
                <Flex vertical=true gap=FlexGap::Small>
                    {Permission::all().iter().copied().map(permission_box).collect_view()}
                </Flex>
            </fieldset>

            <Flex gap=FlexGap::Small justify=FlexJustify::End>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(notifications, on_close)
                    disabled=Signal::derive(move || vm.form.with(|f| f.name.trim().is_empty()))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_checkboxes_edit_form() {
        let owner = Owner::new();
        owner.set();
        let list = RwSignal::new(RecordList::<Role>::default());
        let vm = RoleDetailsViewModel::new(list, None);

        let first = Permission::all()[0];
        assert!(!vm.has_permission(first));
        vm.set_permission(first, true);
        vm.set_permission(first, true);
        assert!(vm.has_permission(first));
        assert_eq!(vm.form.with_untracked(|f| f.permissions.len()), 1);
        vm.set_permission(first, false);
        assert!(!vm.has_permission(first));
    }
}
